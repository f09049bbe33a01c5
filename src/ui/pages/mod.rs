pub mod about;
pub mod analysis;
pub mod contact;
pub mod home;
pub mod pricing;
pub mod results;
pub mod services;

pub use about::AboutPage;
pub use analysis::AnalysisPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use pricing::PricingPage;
pub use results::ResultsPage;
pub use services::ServicesPage;
