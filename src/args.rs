use std::env;

#[derive(Debug)]
pub struct Arguments {
    pub nthreads: i64,
    pub npoints: i64,
}

/// Parse the two required positional arguments from the process arguments.
pub fn parse_args() -> Result<Arguments, String> {
    let argv: Vec<String> = env::args().collect();
    parse_from(&argv)
}

pub fn parse_from(argv: &[String]) -> Result<Arguments, String> {
    let program = argv.first().map(String::as_str).unwrap_or("mandelgrid");

    if argv.len() != 3 {
        return Err(format!("Usage: {} nthreads npoints", program));
    }

    let nthreads = argv[1]
        .parse::<i64>()
        .map_err(|_| format!("nthreads must be a base-10 integer, got '{}'", argv[1]))?;
    let npoints = argv[2]
        .parse::<i64>()
        .map_err(|_| format!("npoints must be a base-10 integer, got '{}'", argv[2]))?;

    if nthreads <= 0 || npoints <= 0 {
        return Err("nthreads and npoints must be positive".to_string());
    }

    Ok(Arguments { nthreads, npoints })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("mandelgrid")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_two_valid_arguments() {
        let parsed = parse_from(&argv(&["4", "100"])).unwrap();
        assert_eq!(parsed.nthreads, 4);
        assert_eq!(parsed.npoints, 100);
    }

    #[test]
    fn test_missing_argument_reports_usage() {
        let err = parse_from(&argv(&["4"])).unwrap_err();
        assert!(err.starts_with("Usage:"));
    }

    #[test]
    fn test_extra_argument_reports_usage() {
        let err = parse_from(&argv(&["4", "100", "extra"])).unwrap_err();
        assert!(err.starts_with("Usage:"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = parse_from(&argv(&["0", "100"])).unwrap_err();
        assert!(err.contains("must be positive"));
    }

    #[test]
    fn test_negative_points_rejected() {
        let err = parse_from(&argv(&["4", "-5"])).unwrap_err();
        assert!(err.contains("must be positive"));
    }

    #[test]
    fn test_non_numeric_argument_rejected() {
        let err = parse_from(&argv(&["four", "100"])).unwrap_err();
        assert!(err.contains("base-10 integer"));
    }
}
