use std::{convert::TryFrom, marker::PhantomData, path::Path, time::Instant};

use log::info;

use crate::{index::Idx, Error};

use super::{InputCapabilities, InputPath, ParseValue};

/// Reads a weighted graph from a file that contains an edge per line.
///
/// The first line is a header carrying the node count and the edge count.
/// Every following line is an edge, represented by a source node id, a target
/// node id and the distance of the edge. Fields are separated by spaces or
/// tabs. Empty lines and lines starting with `#` are ignored.
///
/// Storing the node count in the header allows graphs with a single node and
/// no edges to be read back.
///
/// # Example
///
/// ```ignore
/// > cat my_graph.wel
/// # nodes edges
/// 4 4
/// 0 1 17
/// 0 2 3
/// 1 2 42
/// 2 3 8
/// ```
pub struct WeightedEdgeListInput<NI: Idx, EV> {
    _idx: PhantomData<(NI, EV)>,
}

impl<NI: Idx, EV> Default for WeightedEdgeListInput<NI, EV> {
    fn default() -> Self {
        Self { _idx: PhantomData }
    }
}

impl<NI: Idx, EV> InputCapabilities<NI> for WeightedEdgeListInput<NI, EV> {
    type GraphInput = EdgeList<NI, EV>;
}

/// A list of `(source, target, value)` triples and an optional node count.
///
/// Without an explicit node count, the graph has `max_node_id + 1` nodes.
#[derive(Debug)]
pub struct EdgeList<NI: Idx, EV> {
    list: Vec<(NI, NI, EV)>,
    node_count: Option<NI>,
}

impl<NI: Idx, EV> EdgeList<NI, EV> {
    pub fn new(edges: Vec<(NI, NI, EV)>) -> Self {
        Self {
            list: edges,
            node_count: None,
        }
    }

    pub fn with_node_count(edges: Vec<(NI, NI, EV)>, node_count: NI) -> Self {
        Self {
            list: edges,
            node_count: Some(node_count),
        }
    }

    /// Fails if there is no explicit node count and `max_node_id + 1` is not
    /// representable as `NI`.
    pub fn node_count(&self) -> Result<NI, Error> {
        if let Some(node_count) = self.node_count {
            return Ok(node_count);
        }

        match self.list.iter().map(|&(s, t, _)| NI::max(s, t)).max() {
            Some(max_node_id) => Ok(NI::try_new(max_node_id.index() + 1)?),
            None => Ok(NI::zero()),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub(crate) fn into_vec(self) -> Vec<(NI, NI, EV)> {
        self.list
    }
}

impl<NI, EV, P> TryFrom<InputPath<P>> for EdgeList<NI, EV>
where
    P: AsRef<Path>,
    NI: Idx,
    EV: ParseValue,
{
    type Error = Error;

    fn try_from(path: InputPath<P>) -> Result<Self, Self::Error> {
        let start = Instant::now();
        let bytes = std::fs::read(path.0.as_ref())?;
        info!(
            "Read {} bytes from {:?} in {:?}",
            bytes.len(),
            path.0.as_ref(),
            start.elapsed()
        );

        EdgeList::try_from(bytes.as_slice())
    }
}

impl<NI, EV> TryFrom<&[u8]> for EdgeList<NI, EV>
where
    NI: Idx,
    EV: ParseValue,
{
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let start = Instant::now();

        let mut lines = bytes
            .split(|b| *b == b'\n')
            .enumerate()
            .map(|(i, line)| (i + 1, trim_line_end(line)))
            .filter(|(_, line)| !line.is_empty() && line[0] != b'#');

        let (line, header) = lines.next().ok_or(Error::InvalidHeader { line: 1 })?;
        let mut fields = Fields(header);
        let node_count = fields
            .next_with(<usize as ParseValue>::parse)
            .ok_or(Error::InvalidHeader { line })?;
        let edge_count = fields
            .next_with(<usize as ParseValue>::parse)
            .ok_or(Error::InvalidHeader { line })?;
        if !fields.is_exhausted() {
            return Err(Error::InvalidHeader { line });
        }

        let node_count = NI::try_new(node_count)?;

        // The header is untrusted, an edge line takes at least 6 bytes.
        let mut edges = Vec::with_capacity(edge_count.min(bytes.len() / 6));

        for (line, bytes) in lines {
            let mut fields = Fields(bytes);
            let source = fields
                .next_with(NI::parse)
                .ok_or(Error::InvalidEdge { line })?;
            let target = fields
                .next_with(NI::parse)
                .ok_or(Error::InvalidEdge { line })?;
            if fields.is_exhausted() {
                return Err(Error::MissingDistance { line });
            }
            let distance = fields
                .next_with(EV::parse)
                .ok_or(Error::InvalidEdge { line })?;
            if !fields.is_exhausted() {
                return Err(Error::InvalidEdge { line });
            }

            edges.push((source, target, distance));
        }

        if edges.len() != edge_count {
            return Err(Error::EdgeCountMismatch {
                expected: edge_count,
                actual: edges.len(),
            });
        }

        info!("Parsed {} edges in {:?}", edges.len(), start.elapsed());

        Ok(EdgeList::with_node_count(edges, node_count))
    }
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    match line.last() {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    }
}

#[inline]
fn is_separator(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// The not yet consumed part of a line.
struct Fields<'a>(&'a [u8]);

impl<'a> Fields<'a> {
    fn skip_separators(&mut self) {
        let skip = self.0.iter().take_while(|b| is_separator(**b)).count();
        self.0 = &self.0[skip..];
    }

    fn is_exhausted(&mut self) -> bool {
        self.skip_separators();
        self.0.is_empty()
    }

    /// Parses the next field. Fails if the field is empty or if the parsed
    /// value is not followed by a separator or the end of the line.
    fn next_with<T>(&mut self, parse: impl Fn(&[u8]) -> (T, usize)) -> Option<T> {
        self.skip_separators();
        let (value, len) = parse(self.0);
        if len == 0 {
            return None;
        }
        let rest = &self.0[len..];
        match rest.first() {
            Some(b) if !is_separator(*b) => None,
            _ => {
                self.0 = rest;
                Some(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_edge_list() {
        let input = b"# a small graph\n4 3\n0 1 17\n1\t2\t3\n\n2 3 42\n";
        let edge_list = EdgeList::<u32, u32>::try_from(&input[..]).unwrap();

        assert_eq!(edge_list.node_count().unwrap(), 4);
        assert_eq!(edge_list.len(), 3);
        assert_eq!(
            edge_list.into_vec(),
            vec![(0, 1, 17), (1, 2, 3), (2, 3, 42)]
        );
    }

    #[test]
    fn parse_single_node() {
        let edge_list = EdgeList::<u32, f32>::try_from(&b"1 0\n"[..]).unwrap();

        assert_eq!(edge_list.node_count().unwrap(), 1);
        assert!(edge_list.is_empty());
    }

    #[test]
    fn parse_float_distances_with_crlf() {
        let input = b"3 2\r\n0 1 0.5\r\n1 2 13.37\r\n";
        let edge_list = EdgeList::<usize, f64>::try_from(&input[..]).unwrap();

        assert_eq!(edge_list.into_vec(), vec![(0, 1, 0.5), (1, 2, 13.37)]);
    }

    #[test]
    fn missing_distance() {
        let input = b"3 2\n0 1 5\n1 2\n";
        let res = EdgeList::<u32, u32>::try_from(&input[..]);

        assert!(matches!(res, Err(Error::MissingDistance { line: 3 })));
    }

    #[test]
    fn invalid_edge() {
        let res = EdgeList::<u32, u32>::try_from(&b"3 1\n0 x 5\n"[..]);
        assert!(matches!(res, Err(Error::InvalidEdge { line: 2 })));

        let res = EdgeList::<u32, u32>::try_from(&b"3 1\n0 1 5 6\n"[..]);
        assert!(matches!(res, Err(Error::InvalidEdge { line: 2 })));

        let res = EdgeList::<u32, u32>::try_from(&b"3 1\n0 1 5x\n"[..]);
        assert!(matches!(res, Err(Error::InvalidEdge { line: 2 })));
    }

    #[test]
    fn invalid_header() {
        let res = EdgeList::<u32, u32>::try_from(&b""[..]);
        assert!(matches!(res, Err(Error::InvalidHeader { line: 1 })));

        let res = EdgeList::<u32, u32>::try_from(&b"# comment\n3\n0 1 1\n"[..]);
        assert!(matches!(res, Err(Error::InvalidHeader { line: 2 })));
    }

    #[test]
    fn id_overflow() {
        let res = EdgeList::<u32, u32>::try_from(&b"3 1\n0 4294967297 1\n"[..]);
        assert!(matches!(res, Err(Error::InvalidEdge { line: 2 })));

        let res = EdgeList::<u32, u8>::try_from(&b"3 1\n0 1 256\n"[..]);
        assert!(matches!(res, Err(Error::InvalidEdge { line: 2 })));

        let res = EdgeList::<u64, u32>::try_from(&b"99999999999999999999999 0\n"[..]);
        assert!(matches!(res, Err(Error::InvalidHeader { line: 1 })));

        let res = EdgeList::<u32, u32>::try_from(&b"4294967296 0\n"[..]);
        assert!(matches!(res, Err(Error::IdxError { .. })));
    }

    #[test]
    fn huge_edge_count_in_header() {
        let input = format!("2 {}\n0 1 1\n", usize::MAX);
        let res = EdgeList::<u32, u32>::try_from(input.as_bytes());

        assert!(matches!(
            res,
            Err(Error::EdgeCountMismatch { expected, actual: 1 }) if expected == usize::MAX
        ));
    }

    #[test]
    fn edge_count_mismatch() {
        let res = EdgeList::<u32, u32>::try_from(&b"3 2\n0 1 1\n"[..]);

        assert!(matches!(
            res,
            Err(Error::EdgeCountMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn node_count_from_max_node_id() {
        let edge_list = EdgeList::<u32, ()>::new(vec![(0, 7, ()), (3, 1, ())]);
        assert_eq!(edge_list.node_count().unwrap(), 8);

        let edge_list = EdgeList::<u32, ()>::new(vec![]);
        assert_eq!(edge_list.node_count().unwrap(), 0);
    }

    #[test]
    fn node_count_overflow() {
        let edge_list = EdgeList::<u32, ()>::new(vec![(0, u32::MAX, ())]);
        assert!(matches!(edge_list.node_count(), Err(Error::IdxError { .. })));

        let edge_list = EdgeList::<u32, ()>::new(vec![(0, u32::MAX - 1, ())]);
        assert_eq!(edge_list.node_count().unwrap(), u32::MAX);
    }
}
