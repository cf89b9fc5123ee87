use anyhow::{Context, anyhow, bail};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use validator::Validate;

use na_meste_config::DatabaseConfig;
use na_meste_core::{Role, collect_failures, hash_password, render_failures};
use na_meste_db::{
    CollegeRepository, PgCollegeRepository, PgPool, PgUserRepository, RepositoryError,
    UserRepository, init_db_pool, run_migrations,
};
use na_meste_models::{NewUser, RegisterRequest};

#[derive(Parser)]
#[command(name = "na-meste-cli")]
#[command(about = "na-meste CLI - Administrative tools for the attendance API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Register a user account
    CreateUser {
        /// Display name
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// One of: teacher, scanner, student
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Name of an existing college
        #[arg(short = 'c', long)]
        college: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::CreateUser {
            username,
            email,
            role,
            college,
            password,
        } => handle_create_user(&pool, username, email, role, college, password).await,
    }
}

async fn handle_migrate(pool: &PgPool) -> anyhow::Result<()> {
    run_migrations(pool)
        .await
        .context("Failed to run migrations")?;

    println!("✅ Migrations applied");
    Ok(())
}

fn prompt(value: Option<String>, label: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Input::<String>::new()
            .with_prompt(label)
            .interact_text()
            .with_context(|| format!("Failed to read {}", label.to_lowercase())),
    }
}

async fn handle_create_user(
    pool: &PgPool,
    username: Option<String>,
    email: Option<String>,
    role: Option<String>,
    college: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = prompt(username, "Username")?;
    let email = prompt(email, "Email address")?;
    let role = prompt(role, "Role (teacher, scanner, student)")?;
    let college = prompt(college, "College name")?;
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let college = PgCollegeRepository::new(pool.clone())
        .find_by_name(&college)
        .await?
        .ok_or_else(|| anyhow!("College '{}' does not exist", college))?;

    let request = RegisterRequest {
        username,
        email,
        password,
        role,
        college_id: college.id.into_inner(),
    };
    if let Err(errors) = request.validate() {
        bail!(render_failures(&collect_failures(&errors)));
    }

    let role: Role = request.role.parse()?;
    let new_user = NewUser {
        username: request.username,
        email: request.email,
        password_hash: hash_password(&request.password).map_err(|e| e.error)?,
        role,
        college_id: college.id,
    };

    let user = match PgUserRepository::new(pool.clone()).create(new_user).await {
        Ok(user) => user,
        Err(RepositoryError::Conflict(_)) => bail!("User with this email already exists"),
        Err(e) => return Err(e.into()),
    };

    println!("\n✅ User created successfully!");
    println!("   Email: {}", user.email);
    println!("   Role: {}", user.role);
    println!("   College: {}", college.name);
    Ok(())
}
