use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Args;
use directories::BaseDirs;
use rpassword::prompt_password;
use shared::{
    config::ClientConfig,
    controller::Event,
    models::{ChangePasswordRequest, RegisterRequest},
    session::SessionStore,
    validation,
};
use tracing::warn;

use super::{CliController, finish, signed_in};

/// Token file under the user's configuration directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn for_config(config: &ClientConfig) -> Self {
        Self::new(session_path(&config.token_storage_key))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, token: &str) -> Result<()> {
        ensure_parent(&self.path)?;
        fs::write(&self.path, token)
            .with_context(|| format!("failed to write session at {}", self.path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .context("failed to set session file permissions")?;
        }
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get_token(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn set_token(&self, token: &str) {
        if let Err(err) = self.write(token) {
            warn!("{err:#}");
        }
    }

    fn clear_token(&self) {
        if self.path.exists()
            && let Err(err) = fs::remove_file(&self.path)
        {
            warn!(path = %self.path.display(), "failed to remove session: {err}");
        }
    }
}

pub fn session_path(key: &str) -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("todo-client").join(key))
        .unwrap_or_else(|| PathBuf::from(format!("./{key}")))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create session directory {}", parent.display()))?;
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().ok();
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim().to_string();
    if trimmed.is_empty() {
        bail!("input must not be empty");
    }
    Ok(trimmed)
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email; prompted for when omitted
    #[arg(long, short)]
    pub email: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long, short)]
    pub email: String,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,
}

pub async fn login(controller: &CliController, args: LoginArgs) -> Result<()> {
    let email = match args.email {
        Some(email) => email,
        None => prompt("Email: ")?,
    };
    validation::validate_email(&email)?;
    let password = prompt_password("Password: ")?;
    if password.is_empty() {
        bail!("password must not be empty");
    }

    controller
        .dispatch(Event::LoginSubmitted { email, password })
        .await;
    finish(controller)?;

    let state = controller.state();
    if let Some(welcome) = state.welcome_text() {
        println!("{welcome}");
    }
    println!(
        "Session saved to {}",
        controller.session().path().display()
    );
    Ok(())
}

pub async fn register(controller: &CliController, args: RegisterArgs) -> Result<()> {
    validation::validate_email(&args.email)?;
    let password = prompt_password("Password: ")?;
    let confirm = prompt_password("Confirm password: ")?;
    if password != confirm {
        bail!(validation::ValidationError::PasswordsDoNotMatch);
    }

    controller
        .dispatch(Event::RegisterSubmitted(RegisterRequest {
            email: args.email,
            first_name: args.first_name,
            last_name: args.last_name,
            password,
        }))
        .await;
    finish(controller)
}

pub async fn whoami(controller: &CliController) -> Result<()> {
    signed_in(controller).await?;
    let state = controller.state();
    if let Some(user) = &state.user {
        println!("{}", user.welcome_text());
        println!("{} {} <{}>", user.first_name, user.last_name, user.email);
    }
    Ok(())
}

pub async fn logout(controller: &CliController) -> Result<()> {
    if controller.session().get_token().is_none() {
        println!(
            "No session found at {}",
            controller.session().path().display()
        );
        return Ok(());
    }
    controller.dispatch(Event::LogoutRequested).await;
    finish(controller)
}

pub async fn change_password(controller: &CliController) -> Result<()> {
    signed_in(controller).await?;

    let current_password = prompt_password("Current password: ")?;
    let new_password = prompt_password("New password: ")?;
    let new_password_confirm = prompt_password("Confirm new password: ")?;

    controller
        .dispatch(Event::ChangePasswordSubmitted(ChangePasswordRequest {
            current_password,
            new_password,
            new_password_confirm,
        }))
        .await;
    finish(controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("token"));

        assert_eq!(store.get_token(), None);
        store.set_token("abc");
        assert_eq!(store.get_token().as_deref(), Some("abc"));

        store.clear_token();
        assert_eq!(store.get_token(), None);
        assert!(!store.path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("token"));
        store.set_token("abc");

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_blank_file_is_no_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "  \n").unwrap();

        assert_eq!(FileSessionStore::new(path).get_token(), None);
    }

    #[test]
    fn test_session_path_uses_key() {
        assert!(session_path("todo-token").ends_with("todo-token"));
    }
}
