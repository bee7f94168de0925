//! CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;
use rota_client::{LoginFlow, PortalClient};
use rota_core::{
    AccessPolicy, GuardDecision, LoginForm, PortalConfig, RecordingNavigator, Role, SessionStore,
};
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use crate::config;
use crate::storage::FileStorage;

const SESSION_FILE: &str = "session.json";

/// Exit code of `check` when the page would be redirected
const REDIRECT_EXIT_CODE: u8 = 2;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the issued token
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password; read from stdin when omitted
        #[arg(short, long, env = "ROTA_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Dashboard to open after signing in
        #[arg(short, long, value_parser = parse_role)]
        role: Option<Role>,
    },

    /// Check whether the stored session may open a page
    Check {
        /// Page path, e.g. /admin/dashboard
        path: String,
    },

    /// Forget the stored session
    Logout,

    /// Print the effective configuration
    Config,
}

fn parse_role(value: &str) -> Result<Role, rota_core::UnknownRole> {
    value.parse()
}

impl Commands {
    pub async fn execute(self, portal: PortalConfig, data_dir: Option<PathBuf>) -> Result<ExitCode> {
        let data_dir = config::data_dir(data_dir);
        let store = SessionStore::new(
            FileStorage::new(data_dir.join(SESSION_FILE)),
            portal.storage.clone(),
        );

        match self {
            Commands::Login {
                username,
                password,
                role,
            } => {
                let password = match password {
                    Some(password) => password,
                    None => read_password()?,
                };
                let mut form = LoginForm::new(username, password);
                form.role = role;
                login(portal, store, form).await
            }
            Commands::Check { path } => match check(&portal, &store, &path) {
                GuardDecision::Allow => {
                    println!("allow");
                    Ok(ExitCode::SUCCESS)
                }
                GuardDecision::Redirect(target) => {
                    println!("redirect {target}");
                    Ok(ExitCode::from(REDIRECT_EXIT_CODE))
                }
            },
            Commands::Logout => logout(portal, store),
            Commands::Config => {
                print!("{}", toml::to_string_pretty(&portal)?);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

async fn login(
    portal: PortalConfig,
    store: SessionStore<FileStorage>,
    form: LoginForm,
) -> Result<ExitCode> {
    let client = PortalClient::from_config(&portal.api)
        .context("Cannot reach the portal; set api.base_url")?;
    let navigator = RecordingNavigator::at(portal.routes.login.clone());
    let flow = LoginFlow::new(client, store, navigator.clone(), portal.routes);

    match flow.submit(&form).await {
        Ok(session) => {
            info!(path = %flow.store().storage().path().display(), "Session stored");
            let role = session.role.unwrap_or_default();
            println!(
                "Signed in as {role}; dashboard: {}",
                navigator.last().unwrap_or_default()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn check(portal: &PortalConfig, store: &SessionStore<FileStorage>, path: &str) -> GuardDecision {
    let navigator = RecordingNavigator::at(path);
    AccessPolicy::new(portal.routes.clone()).enforce(store, &navigator)
}

fn logout(portal: PortalConfig, store: SessionStore<FileStorage>) -> Result<ExitCode> {
    store.clear().context("Failed to clear session")?;
    println!("Signed out; login page: {}", portal.routes.login);
    Ok(ExitCode::SUCCESS)
}

fn read_password() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_core::Session;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore<FileStorage> {
        SessionStore::new(
            FileStorage::new(dir.path().join(SESSION_FILE)),
            PortalConfig::default().storage,
        )
    }

    #[test]
    fn check_without_session_redirects() {
        let dir = tempfile::tempdir().unwrap();
        let decision = check(&PortalConfig::default(), &store_in(&dir), "/staff/dashboard");
        assert_eq!(decision, GuardDecision::Redirect("/".into()));
    }

    #[test]
    fn check_allows_matching_role() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Session::new("tok", Role::Staff)).unwrap();
        assert!(check(&PortalConfig::default(), &store, "/staff/dashboard").is_allowed());
        assert_eq!(
            check(&PortalConfig::default(), &store, "/admin/dashboard"),
            GuardDecision::Redirect("/".into())
        );
    }

    #[test]
    fn logout_clears_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Session::new("tok", Role::Admin)).unwrap();

        logout(PortalConfig::default(), store.clone()).unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn role_flag_accepts_stored_markers() {
        assert_eq!(parse_role("admin").unwrap(), Role::Admin);
        assert!(parse_role("manager").is_err());
    }
}
