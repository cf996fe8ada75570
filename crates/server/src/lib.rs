use db::DBService;
use generator::Generator;

pub mod error;
pub mod http;
pub mod routes;

#[cfg(test)]
pub mod test_support;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    db: DBService,
    generator: Generator,
}

impl AppState {
    pub fn new(db: DBService, generator: Generator) -> Self {
        Self { db, generator }
    }

    pub fn db(&self) -> &DBService {
        &self.db
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }
}
