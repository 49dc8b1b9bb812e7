//! Console Entry Point
//!
//! Loads the seeded records and prints JSON snapshots of the dashboard
//! summary, the user list and one profile page.
//! Uses `anyhow` for startup errors, but library errors stay
//! `accounts::AccountsError`.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use accounts::application::{
    DashboardSummaryUseCase, Notification, OpenProfileInput, OpenProfileUseCase, UploadAvatarUseCase,
    UserListPage,
};
use accounts::domain::ActorContext;
use accounts::domain::policy::SubMode;
use accounts::domain::value_object::record_id::RecordId;
use accounts::models::{DashboardView, ProfileView, UserListView, navigation_view};
use accounts::{DashboardConfig, MemoryAvatarStore, MockUserStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "console=info,accounts=info,audit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Arc::new(DashboardConfig::from_env()?);

    let store = Arc::new(MockUserStore::seeded()?);
    let avatars = Arc::new(MemoryAvatarStore::new());

    tracing::info!(records = store.len(), actor_role = %config.actor_role, "Seed loaded");

    let self_user_id = match config.self_user_id.clone() {
        Some(id) => id,
        None => store
            .first_id()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Seed data contains no records"))?,
    };
    let actor = ActorContext::new(config.actor_role, self_user_id);

    print_json("navigation", &navigation_view(actor.role))?;

    // Dashboard
    let summary = DashboardSummaryUseCase::new(store.clone()).execute().await?;
    print_json("dashboard", &DashboardView::from(&summary))?;

    // User list
    let now = chrono::Utc::now();
    if actor.role.can_manage_users() {
        let mut list = UserListPage::new(store.clone(), config.clone(), actor.role);
        list.load().await?;
        if let Ok(search) = env::var("DASHBOARD_SEARCH") {
            list.set_search(search);
        }
        if let Ok(page) = env::var("DASHBOARD_PAGE") {
            list.set_page(page.trim().parse()?);
        }
        print_json("users", &UserListView::from_page(&list, now))?;
    } else {
        tracing::info!(actor_role = %actor.role, "User list hidden for this role");
    }

    // Profile
    let input = match env::var("DASHBOARD_PROFILE_ID") {
        Ok(raw) if !raw.trim().is_empty() => {
            let id = RecordId::parse_str(raw.trim())?;
            let mode = env::var("DASHBOARD_PROFILE_MODE").ok();
            match SubMode::from_query(mode.as_deref()) {
                SubMode::Add => OpenProfileInput::Add,
                sub => OpenProfileInput::Admin { id, sub },
            }
        }
        _ => OpenProfileInput::SelfService,
    };
    let page = match OpenProfileUseCase::new(store.clone(), config.clone())
        .execute(&actor, input)
        .await
    {
        Ok(page) => page,
        Err(e) if e.is_recoverable() => {
            e.log();
            let err = e.to_app_error();
            print_json("profile", &err.report())?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let avatar_owner = page.record().map(|record| record.id().clone());
    let avatar = match avatar_owner {
        Some(id) => {
            let upload = UploadAvatarUseCase::new(avatars.clone());
            if let Ok(path) = env::var("DASHBOARD_AVATAR_PATH") {
                match upload.execute(&id, &PathBuf::from(path)).await {
                    Ok(notification) => tracing::info!("{}", notification.message),
                    Err(e) => {
                        e.log();
                        let notification = Notification::from(&e);
                        tracing::warn!(level = ?notification.level, "{}", notification.message);
                    }
                }
            }
            upload.current(&id).await?
        }
        None => None,
    };

    print_json("profile", &ProfileView::from_page(&page, avatar, now))?;

    Ok(())
}

fn print_json(label: &str, value: &impl serde::Serialize) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("// {label}\n{json}");
    Ok(())
}
