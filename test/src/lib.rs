//! Shared fixtures for the integration tests.
//!
//! Expected hashes are `keccak256(abi.encodePacked(uint256 id, ...))` of the
//! rows below, the packing the verifier contract applies.

pub mod fixtures {
    use hex_literal::hex;
    use tabletree_common::{
        H256, TableMerkleTree,
        types::{RowSchema, Value},
    };

    pub const ABC_TYPES: [&str; 3] = ["string", "string", "uint256"];

    /// Leaves of `("a","x",1)`, `("b","y",2)`, `("c","z",3)` as rows 1 to 3.
    pub const ABC_LEAVES: [H256; 3] = [
        H256(hex!(
            "db8882c2a89333e39152aea03f82cab6fdbb6caca089706f6791aa2e3a08e27f"
        )),
        H256(hex!(
            "7d8c1a562a2f2756f4600ac51bb01bd5472bc81e11edda63cc2f0e1b96e47a2a"
        )),
        H256(hex!(
            "d21eeac5f293c5d3f1bff83ce211edf18b0cc95b4bc89c0d81bfa977553e53d5"
        )),
    ];

    /// `H(leaf1, leaf2)`, also the root after two rows.
    pub const ABC_ROOT_2: H256 = H256(hex!(
        "b6d3fe2f150c7331bf22bc3104456868d5ba0f21207cfdd61c3fc5e8ef6cecc7"
    ));

    /// `H(leaf3, 0)`.
    pub const ABC_LEAF_3_PADDED: H256 = H256(hex!(
        "5e11626bea545724c0205076c9a57358e58946f847725208bd3261709fc00635"
    ));

    pub const ABC_ROOT_3: H256 = H256(hex!(
        "caf8b529abeaeddfc78f477cc4a436348fca3f70cddee257c4929b8c0dc60760"
    ));

    /// Leaf of `("d","w",4)` as row 4, and the root once it is appended.
    pub const ABC_LEAF_4: H256 = H256(hex!(
        "3ad8ce960afff586da44c80c801c73393e8f6800fd1d58009be2f40b73391acb"
    ));
    pub const ABC_ROOT_4: H256 = H256(hex!(
        "5ea3bb1c2ef38c4839b158eadc2463f9a1fc7f0270cc49ff86116022ee015171"
    ));

    pub fn abc_schema() -> RowSchema {
        RowSchema::parse(&ABC_TYPES).expect("valid schema")
    }

    pub fn abc_rows() -> Vec<Vec<Value>> {
        vec![
            vec!["a".into(), "x".into(), 1u64.into()],
            vec!["b".into(), "y".into(), 2u64.into()],
            vec!["c".into(), "z".into(), 3u64.into()],
        ]
    }

    pub fn abc_tree() -> TableMerkleTree {
        let mut tree = TableMerkleTree::new(abc_schema());
        for row in abc_rows() {
            tree.append(&row).expect("row matches schema");
        }
        tree
    }

    pub fn abc_table_json() -> &'static str {
        r#"{
            "types": ["string", "string", "uint256"],
            "rows": [["a", "x", 1], ["b", "y", 2], ["c", "z", 3]]
        }"#
    }
}
