use std::path::PathBuf;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// File extension of stored graphs.
pub(crate) const EXTENSION: &str = "wel";

#[derive(Debug, clap::Args)]
pub(crate) struct CommonArgs {
    /// Directory that holds the stored graphs.
    #[clap(long, default_value = "graphs")]
    pub(crate) graph_dir: PathBuf,

    /// Use 32 bit node ids instead of 64 bit.
    #[clap(long)]
    pub(crate) use_32_bit: bool,
}

impl CommonArgs {
    /// Location of the graph called `stem`, e.g. `graphs/<stem>.wel`.
    pub(crate) fn graph_path(&self, stem: &str) -> PathBuf {
        self.graph_dir.join(format!("{stem}.{EXTENSION}"))
    }
}

/// Logs at `info` level unless `RUST_LOG` says otherwise.
pub(crate) fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_path() {
        let args = CommonArgs {
            graph_dir: PathBuf::from("graphs"),
            use_32_bit: false,
        };

        assert_eq!(
            args.graph_path("small"),
            PathBuf::from("graphs").join("small.wel")
        );
        assert_eq!(
            args.graph_path("small.v2"),
            PathBuf::from("graphs").join("small.v2.wel")
        );
    }
}
