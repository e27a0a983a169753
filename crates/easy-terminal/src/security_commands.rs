//! Password generation: secure-me.

use rand::Rng;

use easy_types::error::{EasyError, Result};

use crate::interpreter::{Arity, Command, CommandOutput, Environment, Verb};

/// Characters a generated password is drawn from: ASCII letters, digits,
/// and punctuation.
pub const PASSWORD_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

const INVALID_LENGTH: &str = "Please provide a valid numeric length for the password.";

/// Generate a password of `length` characters, each drawn uniformly from
/// [`PASSWORD_ALPHABET`].
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect()
}

fn requested_length(args: &[&str], env: &Environment<'_>) -> Result<usize> {
    let Some(raw) = args.first() else {
        return Ok(env.config.password_length);
    };
    let requested: i128 = raw
        .parse()
        .map_err(|_| EasyError::InvalidArgument(INVALID_LENGTH.to_string()))?;
    if requested < 1 {
        return Err(EasyError::InvalidArgument(
            "Password length must be at least 1.".to_string(),
        ));
    }
    let too_long = |max: usize| {
        EasyError::InvalidArgument(format!("Password length must not exceed {max}."))
    };
    let length = usize::try_from(requested).map_err(|_| too_long(usize::MAX))?;
    match env.config.max_password_length {
        Some(max) if length > max => Err(too_long(max)),
        _ => Ok(length),
    }
}

// ---------------------------------------------------------------------------
// secure-me
// ---------------------------------------------------------------------------

struct SecureMeCmd;
impl Command for SecureMeCmd {
    fn verb(&self) -> Verb {
        Verb::SecureMe
    }
    fn description(&self) -> &str {
        "Generate a random password"
    }
    fn usage(&self) -> &str {
        "secure-me [length]"
    }
    fn category(&self) -> &str {
        "Password Management"
    }
    fn arity(&self) -> Arity {
        Arity::AtMost(1)
    }
    fn validate(&self, args: &[&str], env: &Environment<'_>) -> Result<()> {
        requested_length(args, env).map(|_| ())
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput> {
        let length = requested_length(args, env)?;
        let password = generate_password(&mut rand::thread_rng(), length);
        Ok(CommandOutput::Text(password))
    }
}

/// Register password commands.
pub fn register_security_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(SecureMeCmd));
}
