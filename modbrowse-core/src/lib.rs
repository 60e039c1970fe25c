pub mod error;

pub mod config;

pub mod logging;

pub mod model {
    pub mod app_state;
    pub use app_state::{BrowserState, CopyRequest};

    pub mod catalog;
    pub use catalog::{Catalog, ModuleRecord, ModuleVersion};

    pub mod criteria;
    pub use criteria::{Criteria, SortKey};

    pub mod facets;
    pub use facets::FacetIndex;

    pub mod pagination;
    pub use pagination::{PAGE_SIZE, RevealWindow};

    pub mod selection;
    pub use selection::{COPY_CONFIRM_TTL, CopyConfirmation, SelectionState, usage_snippet};
}

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod event_loop;
    pub use event_loop::EventLoop;
}

pub mod query;

pub use config::Config;

pub use error::AppError;

pub use model::{app_state::BrowserState, catalog::Catalog, criteria::Criteria};
