/// sent as `APIKey`, header names are case insensitive and must be lowercase here
pub static API_KEY_HEADER_KEY: &str = "apikey";
pub static ACCEPT_JSON: &str = "application/json";
pub static FILTER_QUERY_KEY: &str = "$filter";
