use std::io::{self, BufRead, Write};

use thiserror::Error;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication is not implemented")]
    NotImplemented,
    #[error("credentials rejected for {0}")]
    Rejected(String),
    #[error("failed to read credentials: {0}")]
    Prompt(#[from] io::Error),
}

/// Decides whether a user may access the ledger.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Stands in until a real credential check exists: nobody is let in.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unimplemented;

impl Authenticator for Unimplemented {
    fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        log::warn!("cannot authenticate {}: no authenticator configured", credentials.username);
        Err(AuthError::NotImplemented)
    }
}

fn ask(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<String, AuthError> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(answer.trim_end_matches(['\r', '\n']).to_owned())
}

/// Ask for a username, then a password.
pub fn prompt_credentials(input: &mut impl BufRead, output: &mut impl Write) -> Result<Credentials, AuthError> {
    let username = ask("Enter username: ", input, output)?;
    let password = ask("Enter password: ", input, output)?;
    Ok(Credentials { username, password })
}
