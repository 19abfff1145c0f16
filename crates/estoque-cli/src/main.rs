use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use uuid::Uuid;

use estoque::modules::access::{PgAccessStore, resolve};
use estoque::modules::admin::service as admin_service;
use estoque_auth::create_access_token;
use estoque_cli::admin::create_admin;
use estoque_cli::seeder;
use estoque_config::{DatabaseConfig, JwtConfig};
use estoque_db::{PgPool, init_db_pool};
use estoque_models::UserId;

#[derive(Parser)]
#[command(name = "estoque-cli")]
#[command(about = "Estoque TI CLI - Administrative tools for Estoque TI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create (or reuse) a profile and make it an administrator
    CreateAdmin {
        /// Profile ID; must match the auth service's user ID when given
        #[arg(short = 'i', long)]
        id: Option<Uuid>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Full name
        #[arg(short = 'n', long)]
        name: Option<String>,
    },
    /// Give an existing user the admin role
    GrantAdmin { user_id: Uuid },
    /// Remove the admin role from a user
    RevokeAdmin { user_id: Uuid },
    /// Resolve and print a user's access the way the API would
    InspectAccess { user_id: Uuid },
    /// Print a bearer token for a user, signed with JWT_SECRET
    IssueToken {
        user_id: Uuid,

        #[arg(short = 'e', long, default_value = "")]
        email: String,
    },
    /// Insert the sample inventory, comodato and movement rows
    Seed,
    /// Delete the sample rows inserted by `seed`
    ClearSeed,
}

fn fail(context: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("\n❌ {}: {}", context, error);
    std::process::exit(1);
}

async fn connect() -> PgPool {
    match init_db_pool(&DatabaseConfig::from_env()).await {
        Ok(pool) => pool,
        Err(e) => fail("Failed to connect to database", e),
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateAdmin { id, email, name } => {
            handle_create_admin(&connect().await, id, email, name).await
        }
        Commands::GrantAdmin { user_id } => {
            handle_grant_admin(&connect().await, UserId::from_uuid(user_id)).await
        }
        Commands::RevokeAdmin { user_id } => {
            handle_revoke_admin(&connect().await, UserId::from_uuid(user_id)).await
        }
        Commands::InspectAccess { user_id } => {
            handle_inspect_access(connect().await, UserId::from_uuid(user_id)).await
        }
        Commands::IssueToken { user_id, email } => handle_issue_token(user_id, &email),
        Commands::Seed => handle_seed(&connect().await).await,
        Commands::ClearSeed => handle_clear_seed(&connect().await).await,
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    id: Option<Uuid>,
    email: Option<String>,
    name: Option<String>,
) {
    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .unwrap_or_else(|e| fail("Failed to read email", e))
    });

    let name = name.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Full name")
            .allow_empty(true)
            .interact_text()
            .unwrap_or_else(|e| fail("Failed to read name", e))
    });
    let name = Some(name.trim()).filter(|n| !n.is_empty());

    match create_admin(pool, id, email.trim(), name).await {
        Ok(user_id) => {
            println!("\n✅ Administrator ready!");
            println!("   ID: {}", user_id);
            println!("   Email: {}", email.trim());
        }
        Err(e) => fail("Error creating administrator", e),
    }
}

async fn handle_grant_admin(pool: &PgPool, user_id: UserId) {
    match admin_service::grant_admin(pool, user_id).await {
        Ok(_) => println!("✅ {} is now an administrator", user_id),
        Err(e) => fail("Error granting admin role", e.error),
    }
}

async fn handle_revoke_admin(pool: &PgPool, user_id: UserId) {
    match admin_service::revoke_admin(pool, user_id).await {
        Ok(_) => println!("✅ {} is no longer an administrator", user_id),
        Err(e) => fail("Error revoking admin role", e.error),
    }
}

async fn handle_inspect_access(pool: PgPool, user_id: UserId) {
    let store = PgAccessStore::new(pool);
    match resolve(&store, Some(user_id)).await {
        Ok(state) => {
            let role = if state.is_admin { "admin" } else { "user" };
            println!("👤 {} ({})", user_id, role);
            for granted in state.permissions.map(|p| p.granted()).unwrap_or_default() {
                println!("   ✓ {}", granted);
            }
            match serde_json::to_string_pretty(&state) {
                Ok(json) => println!("{}", json),
                Err(e) => fail("Error printing access state", e),
            }
        }
        Err(e) => fail("Error resolving access", e),
    }
}

fn handle_issue_token(user_id: Uuid, email: &str) {
    match create_access_token(user_id, email, &JwtConfig::from_env()) {
        Ok(token) => println!("{}", token),
        Err(e) => fail("Error issuing token", e.error),
    }
}

async fn handle_seed(pool: &PgPool) {
    println!("🌱 Seeding sample data...");
    match seeder::seed_sample_data(pool).await {
        Ok(summary) => {
            println!("\n✅ Seeding complete!");
            println!("   Estoque items: {}", summary.estoque);
            println!("   Comodato items: {}", summary.comodato);
            println!("   Movements: {}", summary.movimentacoes);
            if summary.total() == 0 {
                println!("   (sample rows were already present)");
            }
        }
        Err(e) => fail("Error seeding database", e),
    }
}

async fn handle_clear_seed(pool: &PgPool) {
    match seeder::clear_sample_data(pool).await {
        Ok(summary) => println!("✅ Removed {} sample rows", summary.total()),
        Err(e) => fail("Error clearing sample data", e),
    }
}
