/// Random identifier in the canonical UUID v4 text form.
pub fn generate_record_id() -> String {
    let mut value = rand::random::<u128>();

    // version 4, RFC 4122 variant
    value = (value & !(0xf_u128 << 76)) | (0x4_u128 << 76);
    value = (value & !(0x3_u128 << 62)) | (0x2_u128 << 62);

    let hex = format!("{:032x}", value);

    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_v4_shape() {
        let id = generate_record_id();
        let chars: Vec<char> = id.chars().collect();

        assert_eq!(chars.len(), 36);
        assert_eq!(chars[14], '4');
        assert!(matches!(chars[19], '8' | '9' | 'a' | 'b'));
        assert!([8, 13, 18, 23].iter().all(|&index| chars[index] == '-'));
    }

    #[test]
    fn test_ids_differ() {
        assert_ne!(generate_record_id(), generate_record_id());
    }
}
