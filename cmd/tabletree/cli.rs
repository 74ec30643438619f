use std::path::PathBuf;

use clap::{ArgAction, Parser as ClapParser, Subcommand as ClapSubcommand};
use eyre::eyre;
use tabletree_common::{
    H256, TableMerkleTree,
    merkle_proof::{verify_append, verify_inclusion},
};
use tracing::{Level, info};

use crate::utils::{self, format_hash, format_hashes};

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

#[allow(clippy::upper_case_acronyms)]
#[derive(ClapParser)]
#[command(name = "tabletree", author, version = VERSION_STRING, about = "Merkle roots and proofs for an append-only table committed on-chain", long_about = None)]
pub struct CLI {
    #[command(flatten)]
    pub opts: Options,
    #[command(subcommand)]
    pub command: Subcommand,
}

#[derive(ClapParser)]
pub struct Options {
    #[arg(
        long = "table",
        value_name = "TABLE_FILE",
        env = "TABLETREE_TABLE",
        help = "JSON file with the table's `types` and its `rows` in append order"
    )]
    pub table: PathBuf,
    #[arg(long = "log.level", default_value_t = Level::INFO, value_name = "LOG_LEVEL")]
    pub log_level: Level,
    #[arg(
        long = "json",
        help = "Print proofs as a JSON array instead of one hash per line",
        action = ArgAction::SetTrue
    )]
    pub json: bool,
}

#[derive(ClapSubcommand)]
pub enum Subcommand {
    #[command(name = "root", about = "Print the current table root")]
    Root,
    #[command(name = "leaf", about = "Print the leaf hash of a row")]
    Leaf {
        #[arg(value_name = "POSITION", help = "1-based row id")]
        position: usize,
    },
    #[command(name = "proof", about = "Print the inclusion proof of a row")]
    Proof {
        #[arg(
            value_name = "POSITION",
            help = "1-based row id, or the row count plus one for the append proof"
        )]
        position: usize,
    },
    #[command(name = "append-proof", about = "Print the proof needed to append the next row")]
    AppendProof,
    #[command(name = "verify", about = "Check an inclusion proof like the verifier contract does")]
    Verify {
        #[arg(value_name = "POSITION", help = "1-based row id")]
        position: usize,
        #[arg(long = "leaf", value_name = "LEAF_HASH", value_parser = utils::parse_h256)]
        leaf: H256,
        #[arg(long = "proof", value_name = "PROOF", value_delimiter = ',', num_args = 0.., value_parser = utils::parse_h256)]
        proof: Vec<H256>,
        #[arg(
            long = "root",
            value_name = "ROOT",
            help = "Root to check against, defaults to the table root",
            value_parser = utils::parse_h256
        )]
        root: Option<H256>,
    },
    #[command(
        name = "verify-append",
        about = "Check an append proof like the verifier contract does and print the next root"
    )]
    VerifyAppend {
        #[arg(long = "leaf", value_name = "LEAF_HASH", value_parser = utils::parse_h256)]
        leaf: H256,
        #[arg(long = "proof", value_name = "PROOF", value_delimiter = ',', num_args = 0.., value_parser = utils::parse_h256)]
        proof: Vec<H256>,
    },
}

impl Subcommand {
    /// Runs the command against `tree` and returns what should be printed.
    pub fn run(self, tree: &TableMerkleTree, json: bool) -> eyre::Result<String> {
        match self {
            Subcommand::Root => Ok(format_hash(&tree.root())),
            Subcommand::Leaf { position } => {
                let leaf = tree.get(position).ok_or_else(|| {
                    eyre!("Row {position} does not exist, the table has {} rows", tree.len())
                })?;
                Ok(format_hash(&leaf))
            }
            Subcommand::Proof { position } => {
                let proof = tree.inclusion_proof(position)?;
                format_hashes(&proof, json)
            }
            Subcommand::AppendProof => format_hashes(&tree.append_proof(), json),
            Subcommand::Verify {
                position,
                leaf,
                proof,
                root,
            } => {
                let root = root.unwrap_or_else(|| tree.root());
                if !verify_inclusion(root, tree.len(), position, leaf, &proof) {
                    return Err(eyre!(
                        "Proof for row {position} does not verify against root {}",
                        format_hash(&root)
                    ));
                }
                info!(position, "Inclusion proof verified");
                Ok(format_hash(&root))
            }
            Subcommand::VerifyAppend { leaf, proof } => {
                let next_root = verify_append(tree.len(), tree.root(), leaf, &proof)?;
                info!(position = tree.len() + 1, "Append proof verified");
                Ok(format_hash(&next_root))
            }
        }
    }
}
