//
// Copyright (c) 2025 dsocr-shim authors
//
// This file is part of dsocr-shim
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
//
use std::env;
use std::process::{Command, ExitStatus};

use dsocr_common::command::CommandExtTrait;
use dsocr_common::defaults::{self, debug_trace};
use dsocr_common::error::ShimError;
use dsocr_common::probe;

/// Forward the current invocation to the wrapped OCR tool.
///
/// The tool is resolved on the search path first; only after that check
/// succeeds is the child spawned, with the caller's arguments verbatim,
/// inherited stdio and an untouched environment. The child's exit code
/// becomes the shim's exit code.
pub fn run() -> Result<u8, ShimError> {
    let tool = probe::resolve(defaults::OCR_TOOL)?;

    let mut call = Command::new(&tool);
    call.args(env::args_os().skip(1));

    debug_trace(&format!("Forwarding to {:?}: {:?}", tool, call.get_args()));

    let status = call.forward()?;
    Ok(exit_code(status))
}

/// Map the child's exit status onto the shim's exit code.
/// Termination by signal carries no code and is reported as failure.
fn exit_code(status: ExitStatus) -> u8 {
    match status.code() {
        Some(code) => code as u8,
        None => 1,
    }
}
