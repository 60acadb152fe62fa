use fib_overflow::{fib, FibResult};
use serde::Serialize;
use std::str::FromStr;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

#[derive(Serialize)]
struct Stats {
    program: &'static str,
    n: i32,
    result: FibResult,
    compute_secs: f32,
}

#[derive(Error, Debug)]
enum ScriptError {
    #[error("could not parse {var}={value:?}")]
    Parse { var: &'static str, value: String },

    #[error("could not serialize stats: {0}")]
    Json(#[from] serde_json::Error),
}

fn env_or<T: FromStr>(var: &'static str, def: T) -> Result<T, ScriptError> {
    match std::env::var(var) {
        Ok(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|_| ScriptError::Parse { var, value })
        }
        Err(_) => Ok(def),
    }
}

fn main() -> Result<(), ScriptError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let n = env_or("FIB_ARG", 10i32)?;

    info!(n, "computing fibonacci");
    let it = Instant::now();
    let result = fib(n);
    let compute_secs = it.elapsed().as_secs_f32();
    info!(%result, compute_secs, "done");

    println!("Fibonacci({n}) = {result}");

    let stats = Stats {
        program: "fib-overflow",
        n,
        result,
        compute_secs,
    };

    eprintln!("{}", serde_json::to_string(&stats)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable so parallel tests don't race on the env.

    #[test]
    fn unset_var_uses_default() {
        std::env::remove_var("FIB_SCRIPT_TEST_UNSET");
        assert_eq!(env_or("FIB_SCRIPT_TEST_UNSET", 10i32).unwrap(), 10);
    }

    #[test]
    fn set_var_is_parsed() {
        std::env::set_var("FIB_SCRIPT_TEST_SET", " 20 ");
        assert_eq!(env_or("FIB_SCRIPT_TEST_SET", 10i32).unwrap(), 20);
    }

    #[test]
    fn negative_var_is_parsed() {
        std::env::set_var("FIB_SCRIPT_TEST_NEG", "-4");
        assert_eq!(env_or("FIB_SCRIPT_TEST_NEG", 10i32).unwrap(), -4);
    }

    #[test]
    fn malformed_var_is_an_error() {
        std::env::set_var("FIB_SCRIPT_TEST_BAD", "ten");
        let err = env_or("FIB_SCRIPT_TEST_BAD", 10i32).unwrap_err();
        assert!(matches!(err, ScriptError::Parse { var: "FIB_SCRIPT_TEST_BAD", .. }));
        assert_eq!(err.to_string(), r#"could not parse FIB_SCRIPT_TEST_BAD="ten""#);
    }

    #[test]
    fn stats_serialize_result_tag() {
        let stats = Stats {
            program: "fib-overflow",
            n: 47,
            result: fib(47),
            compute_secs: 0.0,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains(r#""result":"Overflow""#));
        assert!(json.contains(r#""n":47"#));
    }
}
