use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Shell(args) => commands::shell::handle(&args, ctx, flags).await,
        Commands::Gpa(args) => commands::gpa::handle(&args, ctx, flags),
        Commands::Assignments => commands::assignments::handle(ctx, flags),
        Commands::Timetable(args) => commands::timetable::handle(&args, ctx, flags),
        Commands::Summarize(args) => commands::summarize::handle(&args, ctx, flags).await,
        Commands::Ask(args) => commands::ask::handle(&args, ctx, flags).await,
        Commands::Grades => commands::grades::handle(flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}

#[cfg(test)]
mod tests {
    use desk_config::DeskConfig;

    use super::dispatch;
    use crate::cli::root_commands::{Commands, SchemaArgs};
    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: Some(OutputFormat::Raw),
            quiet: true,
        }
    }

    #[tokio::test]
    async fn every_offline_command_is_routed() {
        let ctx = AppContext::init(DeskConfig::default()).expect("context should build");

        dispatch(Commands::Grades, &ctx, &flags())
            .await
            .expect("grades should print");
        dispatch(Commands::Assignments, &ctx, &flags())
            .await
            .expect("assignments should print");
        dispatch(
            Commands::Schema(SchemaArgs {
                type_name: "gpa_entry".to_string(),
            }),
            &ctx,
            &flags(),
        )
        .await
        .expect("schema should print");
    }

    #[tokio::test]
    async fn unknown_schema_type_is_an_error_not_a_panic() {
        let ctx = AppContext::init(DeskConfig::default()).expect("context should build");
        let result = dispatch(
            Commands::Schema(SchemaArgs {
                type_name: "lecture".to_string(),
            }),
            &ctx,
            &flags(),
        )
        .await;

        assert!(result.is_err());
    }
}
