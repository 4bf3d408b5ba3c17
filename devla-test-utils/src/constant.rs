pub static TEST_EMAIL: &str = "student@devla.test";
pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Secret the JWT factory signs with, the client never verifies signatures
pub static TEST_JWT_SECRET: &[u8] = b"devla-test-secret";

/// Lifetime of factory tokens in seconds
pub static TEST_TOKEN_TTL: u64 = 900;
