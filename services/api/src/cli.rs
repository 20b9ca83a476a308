use crate::demo::{run_assess, run_demo, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use health_risk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Health Risk Predictor",
    about = "Score lifestyle questionnaires and serve the health risk API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a questionnaire stored as JSON and print the report
    Assess(AssessArgs),
    /// Score two built-in questionnaires and print their action plans
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::ReportFormat;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["health-risk-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn assess_accepts_profile_and_format() {
        let cli = Cli::try_parse_from([
            "health-risk-api",
            "assess",
            "--profile",
            "answers.json",
            "--format",
            "csv",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.profile.to_string_lossy(), "answers.json");
                assert_eq!(args.format, ReportFormat::Csv);
                assert!(!args.strict);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn serve_overrides_are_optional() {
        let cli =
            Cli::try_parse_from(["health-risk-api", "serve", "--port", "9090"]).expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(9090));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
