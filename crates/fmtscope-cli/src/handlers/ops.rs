use anyhow::Result;
use fmtscope_types::Op;

use crate::output::{format_op_details, format_ops};

pub fn handle(ops: &[Op], detail: bool, enable_color: bool) -> Result<()> {
    if detail {
        for line in format_op_details(ops, enable_color) {
            println!("{}", line);
        }
    } else {
        println!("{}", format_ops(ops, enable_color));
    }
    Ok(())
}
