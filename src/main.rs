//! # uutility - UU 磁性模拟数据集工具
//!
//! 识别 UU 磁性模拟数据集，从基态计算输出中推导磁晶各向异性常数 K1
//! 和饱和磁化强度。
//!
//! ## 子命令
//! - `check`   - 校验数据集目录结构
//! - `analyze` - 对单个数据集推导 K1 和磁化强度
//! - `collect` - 批量收集数据集并输出 CSV
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── analysis/  (校验、能量汇总、K1 推导流水线)
//!   │     ├── batch/     (主文件收集与并行执行)
//!   │     ├── parsers/   (标签行解析器)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```
//!
//! 日志通过 `RUST_LOG` 环境变量控制，例如 `RUST_LOG=info uutility collect data/`。

mod analysis;
mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::init();

    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
