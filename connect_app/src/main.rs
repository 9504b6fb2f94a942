use connect_app::app::App;
use connect_app::auth_context::AuthContext;
use connect_app::config::Config;
use connect_app::routes::{resolve, Resolution};
use connect_app::session_store::SessionStore;
use connect_domain::auth::gateway::AuthGateway;

/// Boot the client and report where a path would land: `connect-app /messages/alice`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    let app = App::new(&config)?;

    let store = SessionStore::new(&config.session_file);
    let mut auth = AuthContext::subscribe(&app);
    auth.init(&app, store.load()).await;
    store.save(app.current_session().as_ref())?;

    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    match resolve(&path, &auth.status()) {
        Resolution::Loading => println!("{path}: loading"),
        Resolution::Render(route) => println!("{path}: render {}", route.path()),
        Resolution::Redirect(route) => println!("{path}: redirect to {}", route.path()),
    }

    Ok(())
}
