use admin_console::application::navigation::visible_navigation;
use admin_console::application::tables::users_columns;
use admin_console::bootstrap;
use admin_console::config::Config;
use admin_console::domain::table::{render_rows, TableQuery};
use admin_console::infrastructure::observability;
use admin_console::AuthContext;
use anyhow::Context;

const DEMO_ADMIN_EMAIL: &str = "john.doe@healthengage.com";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    observability::init(&config).context("Failed to initialize tracing")?;
    tracing::info!(
        default_page_size = config.default_page_size,
        max_page_size = config.max_page_size,
        "Configuration loaded"
    );

    let state = bootstrap::build_app_state(&config);

    let ctx: AuthContext = state
        .auth
        .sign_in(DEMO_ADMIN_EMAIL)
        .await
        .context("Demo administrator sign-in failed")?;

    let query: TableQuery = state.users.default_query();
    let page = state.users.list_users(&ctx, &query).await?;
    let roles = state.roles.list_roles(&ctx, &TableQuery::new()).await?;

    let columns = users_columns(&ctx, &roles.rows);
    let headers: Vec<_> = columns
        .iter()
        .map(|c| c.header(query.sort_by.as_deref(), query.sort_direction))
        .collect();

    let output = serde_json::json!({
        "navigation": visible_navigation(&ctx),
        "users": {
            "columns": headers,
            "rows": render_rows(&columns, &page.rows),
            "pagination": page.pagination,
            "pageWindow": page.pagination.window(),
            "pageSizeOptions": config.page_size_options(),
        },
    });

    println!("{}", serde_json::to_string_pretty(&output)?);

    tracing::info!("Done");
    Ok(())
}
