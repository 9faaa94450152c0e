//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand};

use domain::{CourseFilter, Facet, Level};

/// CourseHub - Browse the course catalog and a learner dashboard
#[derive(Parser, Debug)]
#[command(name = "coursehub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the catalog through the filter pipeline
    Courses(CoursesArgs),

    /// Sign in and show the personal dashboard
    Dashboard(DashboardArgs),

    /// Run a scripted session against the demo data
    Demo(DemoArgs),
}

/// Filter inputs shared by the listing commands
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Free-text search over title, description and instructor
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category, or "All"
    #[arg(short, long, default_value = "All")]
    pub category: Facet<String>,

    /// Level (Beginner, Intermediate, Advanced), or "All"
    #[arg(short, long, default_value = "All")]
    pub level: Facet<Level>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> CourseFilter {
        CourseFilter::new(self.query.clone(), self.category.clone(), self.level.clone())
    }
}

/// Arguments for the courses command
#[derive(Args, Debug)]
pub struct CoursesArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the dashboard command
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Account email
    #[arg(short, long, env = "COURSEHUB_EMAIL")]
    pub email: String,

    /// Account password
    #[arg(short, long, env = "COURSEHUB_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the demo command
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Print the final dashboard as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_to_identity() {
        let cli = Cli::parse_from(["coursehub", "courses"]);
        match cli.command {
            Commands::Courses(args) => {
                assert!(args.filter.to_filter().is_identity());
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_filter_arguments_are_parsed() {
        let cli = Cli::parse_from([
            "coursehub",
            "courses",
            "--query",
            "react",
            "--category",
            "Programming",
            "--level",
            "Beginner",
            "--json",
        ]);
        let Commands::Courses(args) = cli.command else {
            panic!("expected courses command");
        };

        let filter = args.filter.to_filter();
        assert_eq!(filter.query, "react");
        assert_eq!(filter.category, Facet::Only("Programming".to_string()));
        assert_eq!(filter.level, Facet::Only(Level::Beginner));
        assert!(args.json);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result = Cli::try_parse_from(["coursehub", "courses", "--level", "Expert"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_level_must_match_exactly() {
        for level in ["beginner", " Beginner", "all"] {
            let result = Cli::try_parse_from(["coursehub", "courses", "--level", level]);
            assert!(result.is_err(), "{level:?} should be rejected");
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["coursehub", "demo", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Demo(_)));
    }
}
