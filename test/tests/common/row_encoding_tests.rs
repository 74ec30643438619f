use ethereum_types::{Address, H256, U256};
use hex_literal::hex;
use serde_json::json;
use tabletree_common::{
    errors::EncodingError,
    types::{RowSchema, SolidityType, Value},
};

#[test]
fn vehicle_row_leaf() {
    let schema = RowSchema::parse(&[
        "string", "string", "uint256", "string", "string", "uint256", "string", "string", "string",
    ])
    .expect("valid schema");
    let row: Vec<Value> = vec![
        "vehicle".into(),
        "Acura".into(),
        3u64.into(),
        "ACURALINK".into(),
        "ILX".into(),
        2013u64.into(),
        r#"{"vehicle_info":{"mpg":"27"}}"#.into(),
        "4dr Sedan (2.0L 4cyl 5A)".into(),
        "Base".into(),
    ];

    assert_eq!(
        schema.hash_row(1, &row),
        Ok(H256(hex!(
            "835b4e90a7144424f36b55d6f04e8d39ce7b83ca33b4271e3754cf68362f0b53"
        )))
    );
}

#[test]
fn packed_types_row_leaf() {
    let schema =
        RowSchema::parse(&["bool", "address", "int8", "uint16", "bytes4"]).expect("valid schema");
    let row = [
        Value::Bool(true),
        Value::Address(Address::from_low_u64_be(0xabcd)),
        Value::int(-2),
        Value::Uint(U256::from(0x0102)),
        Value::fixed_bytes(hex!("cafebabe").to_vec()),
    ];

    assert_eq!(schema.encode_packed(2, &row).map(|p| p.len()), Ok(32 + 1 + 20 + 1 + 2 + 4));
    assert_eq!(
        schema.hash_row(2, &row),
        Ok(H256(hex!(
            "fd6058d770cd6f7433c0d3c59628aa0972bec6d40657c1016df036bac465bf2a"
        )))
    );
}

#[test]
fn row_id_is_part_of_the_leaf() {
    let schema = RowSchema::parse(&["string"]).expect("valid schema");
    let row = [Value::from("same")];
    assert_ne!(schema.hash_row(1, &row), schema.hash_row(2, &row));
}

#[test]
fn dynamic_fields_are_not_length_prefixed() {
    let schema = RowSchema::parse(&["string", "bytes"]).expect("valid schema");
    let packed = schema
        .encode_packed(1, &["ab".into(), Value::Bytes(vec![0xcd].into())])
        .expect("row matches schema");

    assert_eq!(packed.len(), 32 + 3);
    assert_eq!(&packed[32..], b"ab\xcd");
}

#[test]
fn empty_schema_packs_only_the_id() {
    let schema = RowSchema::default();
    let packed = schema.encode_packed(7, &[]).expect("row matches schema");
    assert_eq!(packed, U256::from(7).to_big_endian().to_vec());
}

#[test]
fn json_fields_follow_declared_types() {
    let cases = [
        (json!("Acura"), "string", Value::from("Acura")),
        (json!(true), "bool", Value::Bool(true)),
        (json!(2013), "uint256", Value::from(2013u64)),
        (json!("0x7dd"), "uint16", Value::from(2013u64)),
        (json!(-3), "int32", Value::int(-3)),
        (json!("-3"), "int", Value::int(-3)),
        (json!("0xcafe"), "bytes", Value::Bytes(vec![0xca, 0xfe].into())),
        (json!("cafe"), "bytes2", Value::fixed_bytes(vec![0xca, 0xfe])),
        (
            json!(format!("0x{}", "11".repeat(20))),
            "address",
            Value::Address(Address::repeat_byte(0x11)),
        ),
    ];

    for (json, ty, expected) in cases {
        let ty: SolidityType = ty.parse().expect("valid type");
        assert_eq!(Value::from_json(&json, ty), Ok(expected), "{ty}");
    }
}

#[test]
fn json_fields_of_the_wrong_kind_are_rejected() {
    let uint = SolidityType::Uint(256);
    assert_eq!(
        Value::from_json(&json!("twelve"), uint),
        Err(EncodingError::InvalidValue {
            ty: uint,
            value: "\"twelve\"".to_string(),
        })
    );
    assert!(Value::from_json(&json!(-1), uint).is_err());
    assert!(Value::from_json(&json!(1), SolidityType::String).is_err());
    assert!(Value::from_json(&json!("0x11"), SolidityType::Address).is_err());
}

#[test]
fn schema_deserializes_from_type_names() {
    let schema: RowSchema =
        serde_json::from_value(json!(["string", "uint", "bytes32"])).expect("valid schema");
    assert_eq!(
        schema.types(),
        &[
            SolidityType::String,
            SolidityType::Uint(256),
            SolidityType::FixedBytes(32)
        ]
    );
    assert!(serde_json::from_value::<RowSchema>(json!(["uint256[]"])).is_err());
    assert!(serde_json::from_value::<RowSchema>(json!(["bytes33"])).is_err());
}

#[test]
fn positive_signed_strings_never_wrap_negative() {
    let int256 = SolidityType::Int(256);
    let two_pow_255 = "57896044618658097711785492504343953926634992332820282019728792003956564819968";
    assert!(matches!(
        Value::from_json(&json!(two_pow_255), int256),
        Err(EncodingError::InvalidValue { .. })
    ));

    let int8 = SolidityType::Int(8);
    let all_ones = format!("0x{}", "ff".repeat(32));
    assert!(matches!(
        Value::from_json(&json!(all_ones), int8),
        Err(EncodingError::InvalidValue { .. })
    ));

    let schema = RowSchema::parse(&["int8"]).expect("valid schema");
    let byte_max = Value::from_json(&json!("0xff"), int8).expect("within int256");
    assert_eq!(byte_max, Value::Int(U256::from(0xff)));
    assert_eq!(
        schema.encode_packed(1, &[byte_max]),
        Err(EncodingError::IntegerOverflow { index: 0, ty: int8 })
    );

    let positive_max = Value::from_json(&json!("127"), int8).expect("within int8");
    let packed = schema.encode_packed(1, &[positive_max]).expect("fits int8");
    assert_eq!(packed.last(), Some(&0x7f));
}
