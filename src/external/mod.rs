pub(crate) mod companies_http;
pub(crate) mod exports_http;
pub(crate) mod investments_http;
pub(crate) mod reference_data;
