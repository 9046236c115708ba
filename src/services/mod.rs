pub(crate) mod csv_export_service;
pub(crate) mod report_service;
