// ------------------------------------------------
//      pool day/hour data
// ------------------------------------------------
pub fn pool_time_data_id(pool_address: &str, index: i64) -> String {
    format!("{}-{}", pool_address, index)
}

// ------------------------------------------------
//      token day/hour data
// ------------------------------------------------
pub fn token_time_data_id(token_address: &str, index: i64) -> String {
    format!("{}-{}", token_address, index)
}

// ------------------------------------------------
//      network day data
// ------------------------------------------------
// one network per deployment, the day alone is unique
pub fn network_day_data_id(day_id: i64) -> String {
    day_id.to_string()
}
