//! # 美化输出工具
//!
//! 提供统一的终端输出样式。诊断日志走 `log`，这里只负责面向用户的消息。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use crate::models::Quantity;
use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印校验结论
pub fn print_verdict(target: &str, valid: bool) {
    if valid {
        println!("{} {} {}", "[OK]".green().bold(), target, "is a valid dataset".green());
    } else {
        println!("{} {} {}", "[ERR]".red().bold(), target, "is not a valid dataset".red());
    }
}

/// 打印物理量；未计算的量显示为 "not computed"
pub fn print_quantity(label: &str, quantity: Option<Quantity>) {
    match quantity {
        Some(q) => println!("  {:<28} {}", label, format!("{:.6}", q).bold()),
        None => println!("  {:<28} {}", label, "not computed".dimmed()),
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
