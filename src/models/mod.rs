mod company;
mod investment;
mod report;

pub use company::Company;
pub use investment::{Holding, Investment};
pub use report::ReportRow;
