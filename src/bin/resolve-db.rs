//! Print the database descriptor resolved from the current environment

use clap::Parser;
use dbresolve::env::{EnvAccessor, ProcessEnv};
use dbresolve::Resolver;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Resolve DATABASE_* environment variables into a connection descriptor.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory that relative sqlite filenames are joined to
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli, &ProcessEnv::new()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to resolve database configuration");
            ExitCode::FAILURE
        }
    }
}

fn run<E: EnvAccessor>(cli: &Cli, env: &E) -> dbresolve::Result<String> {
    let descriptor = Resolver::new(cli.base_dir.clone()).resolve(env)?;
    descriptor.validate()?;

    tracing::debug!(
        backend = %descriptor.backend(),
        tls = descriptor.tls().is_some(),
        "resolved database configuration"
    );

    if cli.compact {
        descriptor.to_json()
    } else {
        descriptor.to_json_pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbresolve::env::MapEnv;
    use dbresolve::Error;

    fn cli(compact: bool) -> Cli {
        Cli {
            base_dir: PathBuf::from("/srv/app"),
            compact,
        }
    }

    #[test]
    fn test_run_prints_pretty_json() {
        let env = MapEnv::new().with("DATABASE_CLIENT", "postgres");
        let output = run(&cli(false), &env).unwrap();
        assert!(output.contains('\n'));

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["client"], "postgres");
        assert_eq!(json["connection"]["port"], 5432);
        assert_eq!(json["pool"]["max"], 10);
    }

    #[test]
    fn test_run_prints_compact_json() {
        let env = MapEnv::new().with("DATABASE_CLIENT", "sqlite");
        let output = run(&cli(true), &env).unwrap();
        assert!(!output.contains('\n'));

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["connection"]["filename"], "/srv/app/.tmp/data.db");
        assert_eq!(json["useNullAsDefault"], true);
    }

    #[test]
    fn test_run_rejects_unsupported_backend() {
        let env = MapEnv::new().with("DATABASE_CLIENT", "oracle");
        match run(&cli(false), &env) {
            Err(Error::UnsupportedBackend(client)) => assert_eq!(client, "oracle"),
            other => panic!("expected UnsupportedBackend, got {:?}", other),
        }
    }

    #[test]
    fn test_run_rejects_inverted_pool() {
        let env = MapEnv::new()
            .with("DATABASE_CLIENT", "mysql")
            .with("DATABASE_POOL_MIN", "12")
            .with("DATABASE_POOL_MAX", "3");
        assert!(matches!(
            run(&cli(false), &env),
            Err(Error::InvalidPool { min: 12, max: 3 })
        ));
    }
}
