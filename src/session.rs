// src/session.rs
// =============================================================================
// The HTTP session shared by every fetch in one crawl.
//
// A session is:
// - one reqwest Client (connection pooling, fixed timeout)
// - one User-Agent, picked at random from a small pool when the session is
//   built and then reused for every request
//
// The random pick takes the RNG as a parameter instead of reaching for a
// global, so tests can pass a seeded RNG and get the same agent every time.
// =============================================================================

use crate::error::SessionError;
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::Client;
use std::time::Duration;

/// Browser identifiers we pretend to be. One is chosen per session.
pub const USER_AGENTS: [&str; 5] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 15_0 like Mac OS X) AppleWebKit/537.36 (KHTML, like Gecko) Version/15.0 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (iPad; CPU OS 15_0 like Mac OS X) AppleWebKit/537.36 (KHTML, like Gecko) Version/15.0 Mobile/15E148 Safari/604.1",
];

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Settings needed to build a Session
//
// user_agent: None = pick one from USER_AGENTS
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
    user_agent: String,
}

impl Session {
    // Builds the session, resolving the User-Agent exactly once
    //
    // Parameters:
    //   config: timeout and optional fixed User-Agent
    //   rng: source of randomness for the User-Agent pick
    pub fn new<R: Rng + ?Sized>(config: SessionConfig, rng: &mut R) -> Result<Self, SessionError> {
        let user_agent = match config.user_agent {
            Some(agent) => agent,
            None => pick_user_agent(rng).to_string(),
        };

        // No redirect/retry tweaks here: reqwest's defaults are all we want
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent.clone())
            .build()?;

        Ok(Self { client, user_agent })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

// Picks one entry of USER_AGENTS uniformly at random
pub fn pick_user_agent<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // The pool is a non-empty constant, so choose() always returns Some
    USER_AGENTS.choose(rng).copied().unwrap_or(USER_AGENTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_is_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let agent = pick_user_agent(&mut rng);
            assert!(USER_AGENTS.contains(&agent));
        }
    }

    #[test]
    fn test_same_seed_same_agent() {
        let first = Session::new(SessionConfig::default(), &mut StdRng::seed_from_u64(42)).unwrap();
        let second = Session::new(SessionConfig::default(), &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first.user_agent(), second.user_agent());
    }

    #[test]
    fn test_unusable_user_agent_fails_to_build() {
        let config = SessionConfig {
            user_agent: Some("broken\nagent".to_string()),
            ..SessionConfig::default()
        };
        let result = Session::new(config, &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(SessionError::Client(_))));
    }

    #[test]
    fn test_fixed_user_agent_wins() {
        let config = SessionConfig {
            user_agent: Some("product-crawler-test/1.0".to_string()),
            ..SessionConfig::default()
        };
        let session = Session::new(config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(session.user_agent(), "product-crawler-test/1.0");
    }
}
