use uuid::Uuid;

/// Fresh random identifier for host documents and anonymous participants.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Short id tying the log lines of one outgoing command together.
pub fn new_correlation_id() -> String {
    let mut simple = Uuid::new_v4().simple().to_string();
    simple.truncate(8);
    simple
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_v4_and_distinct() {
        let id = new_id();
        assert_eq!(Uuid::parse_str(&id).unwrap().get_version_num(), 4);
        assert_ne!(id, new_id());
    }

    #[test]
    fn correlation_id_is_eight_hex_chars() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
