#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_framework;
    use crate::cli::{Cli, Command, RuntimeArg};
    use clap::Parser;
    use heft::{Framework, JsRuntime};
    use std::path::PathBuf;

    #[test]
    fn test_parse_framework_known_ids() {
        assert_eq!(parse_framework("preact"), Ok(Framework::Preact));
        assert_eq!(parse_framework(" vue "), Ok(Framework::Vue));
        assert_eq!(parse_framework("svelte4"), Ok(Framework::Svelte4));
    }

    #[test]
    fn test_parse_framework_unknown() {
        let err = parse_framework("ember").unwrap_err();
        assert!(err.starts_with("unknown framework 'ember'"), "{err}");
        assert!(err.contains("preact"));
    }

    #[test]
    fn test_run_defaults_leave_config_alone() {
        let cli = Cli::try_parse_from(["heft", "run"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        let overrides = args.to_overrides();
        assert!(overrides.frameworks.is_none());
        assert!(overrides.bundle.is_none());
        assert!(overrides.fail_fast.is_none());
        assert!(overrides.js_runtime.is_none());
    }

    #[test]
    fn test_run_flags_map_to_overrides() {
        let cli = Cli::try_parse_from([
            "heft",
            "run",
            "--root",
            "bench",
            "--only",
            "vue,preact",
            "--no-bundle",
            "--no-persist",
            "--fail-fast",
            "--runtime",
            "bun",
            "-o",
            "results",
        ])
        .unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.runtime, Some(RuntimeArg::Bun));

        let overrides = args.to_overrides();
        assert_eq!(overrides.root, Some(PathBuf::from("bench")));
        assert_eq!(overrides.out_dir, Some(PathBuf::from("results")));
        assert_eq!(
            overrides.frameworks,
            Some(vec![Framework::Vue, Framework::Preact])
        );
        assert_eq!(overrides.bundle, Some(false));
        assert_eq!(overrides.persist, Some(false));
        assert_eq!(overrides.component, None);
        assert_eq!(overrides.fail_fast, Some(true));
        assert_eq!(overrides.js_runtime, Some(JsRuntime::Bun));
    }

    #[test]
    fn test_only_rejects_unknown_framework() {
        assert!(Cli::try_parse_from(["heft", "run", "--only", "preact,ember"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["heft", "-v", "-q", "list"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["heft", "list", "--no-color", "--config", "alt.toml"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Command::List(_)));
    }
}
