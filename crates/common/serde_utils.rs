pub mod u256 {
    use ethereum_types::U256;

    /// Parses an unsigned integer written either as a `0x` hex string or in
    /// decimal.
    pub fn from_hex_or_dec_str(value: &str) -> Result<U256, String> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix("0x") {
            U256::from_str_radix(hex, 16).map_err(|e| e.to_string())
        } else {
            U256::from_dec_str(value).map_err(|e| e.to_string())
        }
    }

    /// Parses a possibly negative integer into its 256-bit two's complement
    /// form, which is how signed row values are carried.
    pub fn from_signed_str(value: &str) -> Result<U256, String> {
        let value = value.trim();
        match value.strip_prefix('-') {
            Some(magnitude) => {
                let magnitude = from_hex_or_dec_str(magnitude)?;
                if magnitude > U256::one() << 255 {
                    return Err(format!("{value} is below the int256 range"));
                }
                Ok(twos_complement_neg(magnitude))
            }
            None => {
                let magnitude = from_hex_or_dec_str(value)?;
                // Bit 255 set would read back as a negative value.
                if magnitude >= U256::one() << 255 {
                    return Err(format!("{value} is above the int256 range"));
                }
                Ok(magnitude)
            }
        }
    }

    pub fn twos_complement_neg(value: U256) -> U256 {
        (!value).overflowing_add(U256::one()).0
    }
}

pub mod bytes {
    /// Decodes a hex string, with or without the `0x` prefix.
    pub fn from_hex_str(value: &str) -> Result<Vec<u8>, hex::FromHexError> {
        let value = value.trim();
        hex::decode(value.strip_prefix("0x").unwrap_or(value))
    }
}
