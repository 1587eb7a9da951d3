use std::env;
use std::path::PathBuf;

const PROFILE_FILE_NAME: &str = ".braini-games.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig
{
    pub seed: Option<u64>,
    pub profile_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine
{
    pub command: Option<String>,
    pub config: ShellConfig,
}

impl CommandLine
{
    pub fn from_args(args: &[String]) -> Result<Self, String>
    {
        Self::parse(args, |key| env::var(key).ok())
    }

    fn parse(args: &[String], lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String>
    {
        let mut command: Option<String> = None;
        let mut seed: Option<u64> = None;
        let mut profile: Option<PathBuf> = None;
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--seed" {
                let value = iter
                    .next()
                    .ok_or_else(|| "Expected value after --seed".to_string())?;
                seed = Some(parse_seed(value)?);
            } else if let Some(rest) = arg.strip_prefix("--seed=") {
                seed = Some(parse_seed(rest)?);
            } else if arg == "--profile" {
                let value = iter
                    .next()
                    .ok_or_else(|| "Expected value after --profile".to_string())?;
                profile = Some(PathBuf::from(value));
            } else if let Some(rest) = arg.strip_prefix("--profile=") {
                profile = Some(PathBuf::from(rest));
            } else if arg == "-h" || arg == "--help" {
                command = Some("help".to_string());
            } else if arg.starts_with('-') {
                return Err(format!("Unknown option '{arg}'. Run with --help."));
            } else if command.is_none() {
                command = Some(arg.clone());
            } else {
                return Err(format!("Unexpected argument '{arg}'. Run with --help."));
            }
        }

        let seed = match seed {
            Some(seed) => Some(seed),
            None => match lookup("BRAINI_SEED") {
                Some(value) => Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| "BRAINI_SEED must be a valid u64".to_string())?,
                ),
                None => None,
            },
        };
        let profile_path = profile
            .or_else(|| lookup("BRAINI_PROFILE").map(PathBuf::from))
            .unwrap_or_else(|| default_profile_path(lookup("HOME")));

        Ok(Self {
            command,
            config: ShellConfig { seed, profile_path },
        })
    }
}

fn parse_seed(value: &str) -> Result<u64, String>
{
    value
        .parse::<u64>()
        .map_err(|_| "--seed must be a valid u64".to_string())
}

fn default_profile_path(home: Option<String>) -> PathBuf
{
    match home.filter(|home| !home.is_empty()) {
        Some(home) => PathBuf::from(home).join(PROFILE_FILE_NAME),
        None => PathBuf::from(PROFILE_FILE_NAME),
    }
}
