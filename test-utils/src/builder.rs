use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts.
///
/// Every context gets its own in-memory SQLite database. Call `with_migrations()` to
/// apply the production schema, including the unique indexes the repositories rely on
/// for idempotent inserts and roster exclusivity.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_migrations()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    migrate: bool,
}

impl TestBuilder {
    /// Creates a new test builder with an empty schema.
    pub fn new() -> Self {
        Self { migrate: false }
    }

    /// Applies every migration from the `migration` crate when the context is built.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_migrations(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Builds and initializes the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the database connected and schema applied
    /// - `Err(TestError::Database)` - Failed to connect or to run migrations
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.database().await?;

        if self.migrate {
            setup.with_migrations().await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
