use proptest::prelude::*;

use coinpay_types::{AssetType, CoinObject, SuiAddress, TransactionDigest};

proptest! {
    /// Every `0x`-prefixed hex string of 1..=64 digits parses and keeps its text.
    #[test]
    fn hex_addresses_parse_verbatim(hex in "[0-9a-fA-F]{1,64}") {
        let raw = format!("0x{hex}");
        let addr = SuiAddress::parse(raw.clone()).unwrap();
        prop_assert_eq!(addr.as_str(), raw.as_str());
    }

    /// Strings without the `0x` prefix are never valid addresses.
    #[test]
    fn unprefixed_strings_are_rejected(s in "[0-9a-fA-F]{0,64}") {
        prop_assert!(SuiAddress::parse(s).is_err());
    }

    /// Any non-hex character after the prefix invalidates the address.
    #[test]
    fn non_hex_digit_is_rejected(
        head in "[0-9a-f]{0,10}",
        bad in "[g-zG-Z_ ]",
        tail in "[0-9a-f]{0,10}",
    ) {
        let raw = format!("0x{head}{bad}{tail}");
        prop_assert!(SuiAddress::parse(raw).is_err());
    }

    /// Parsing agrees with `is_well_formed`.
    #[test]
    fn parse_agrees_with_is_well_formed(s in "\\PC{0,70}") {
        prop_assert_eq!(SuiAddress::parse(s.clone()).is_ok(), SuiAddress::is_well_formed(&s));
    }

    /// Asset tags compare by exact string equality.
    #[test]
    fn asset_match_is_exact(a in "[A-Za-z:0-9]{1,20}", b in "[A-Za-z:0-9]{1,20}") {
        let coin = CoinObject::new("c", a.as_str(), 1);
        prop_assert_eq!(coin.is_asset(&AssetType::new(b.clone())), a == b);
    }

    /// Digest JSON form is the bare string.
    #[test]
    fn digest_serializes_as_string(d in "[A-Za-z0-9]{1,44}") {
        let json = serde_json::to_string(&TransactionDigest::new(d.clone())).unwrap();
        prop_assert_eq!(json, format!("\"{d}\""));
    }
}
