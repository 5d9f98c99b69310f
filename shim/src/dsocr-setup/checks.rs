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
use std::process::Command;

use colored::Colorize;
use dsocr_common::command::CommandExtTrait;
use dsocr_common::defaults;

/// Report whether a compatible interpreter is on the search path.
/// Absence is a warning, never a failure.
pub fn check_python() {
    match Command::new(defaults::PYTHON).arg("--version").perform() {
        Ok(output) => {
            let mut version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if version.is_empty() {
                // some interpreters report their version on stderr
                version = String::from_utf8_lossy(&output.stderr).trim().to_string();
            }
            println!("{}", format!("✔ Python detected: {}", version).green());
        }
        Err(_) => {
            println!(
                "{}",
                format!("Warning: {} not found. This CLI requires Python 3.10+.", defaults::PYTHON).yellow()
            );
        }
    }
}

/// Check that the wrapped tool answers a help query. On failure print the
/// install hint and the environment variables the tool understands.
pub fn check_tool() {
    match Command::new(defaults::OCR_TOOL).arg("--help").perform() {
        Ok(_) => {
            println!("{}", format!("✔ \"{}\" command detected.", defaults::OCR_TOOL).green());
        }
        Err(_) => {
            println!("{}", format!("Notice: \"{}\" command not found in PATH.", defaults::OCR_TOOL).yellow());
            println!("To use this CLI, please ensure the Python package is installed:");
            println!("{}", format!("  {}", defaults::INSTALL_HINT).cyan());
            println!();
            println!("Environment variables passed to the Python process:");
            println!("  - {}: Custom Hugging Face cache", defaults::CACHE_ENV);
            println!("  - {}: Explicit model path", defaults::MODEL_DIR_ENV);
            println!("  - {}: Set \"1\" to disable network", defaults::OFFLINE_ENV);
        }
    }
}
