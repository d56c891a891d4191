//! Interactive CLI to provision an administrator account.
//!
//! Prompts for name, email, and password on stdin, applies the same
//! validation rules as the registration endpoint, and inserts a role-0
//! user directly through the repository layer.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use relay_api::auth::password::{hash_password, validate_password_strength};
use relay_core::roles::ADMIN_ROLE_CODE;
use relay_db::models::user::CreateUser;
use relay_db::repositories::UserRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in the environment")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let name = prompt(&mut lines, "Name: ")?;
    let email = prompt(&mut lines, "Email: ")?;
    let password = prompt(&mut lines, "Password: ")?;

    let name = name.trim().to_string();
    let email = email.trim().to_lowercase();

    if name.is_empty() || email.is_empty() {
        bail!("Name and email cannot be empty");
    }
    if let Err(msg) = validate_password_strength(&password) {
        bail!("{msg}");
    }

    let password_hash = hash_password(&password)
        .map_err(|e| anyhow::anyhow!("Password hashing failed: {e}"))?;

    let pool = relay_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    relay_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let input = CreateUser {
        name,
        email,
        password_hash,
        role: ADMIN_ROLE_CODE,
    };
    let user = UserRepo::create(&pool, &input)
        .await
        .context("Failed to create administrator")?;

    println!(
        "Administrator created: id={} name={} email={} role={}",
        user.id,
        user.name,
        user.email,
        user.role_name()
    );
    Ok(())
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> anyhow::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let line = lines
        .next()
        .context("Unexpected end of input")?
        .context("Failed to read from stdin")?;
    Ok(line)
}
