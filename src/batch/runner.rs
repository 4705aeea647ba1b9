//! # 批量执行器
//!
//! 并行执行多个数据集的推导流水线。每个数据集的流水线独立运行，
//! 彼此之间只共享进度计数。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{Result, UuError};
use crate::models::AnisotropyResult;
use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 单个主文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 推导完成
    Computed(AnisotropyResult),
    /// 跳过（如目录结构不完整、非 UU 数据集）
    Skipped(String, String), // (文件路径, 原因)
    /// 推导失败，结果中保留已到达的阶段
    Failed(AnisotropyResult, String), // (部分结果, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub computed: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 所有进入流水线的数据集结果（按输入顺序）
    pub results: Vec<AnisotropyResult>,
    /// 跳过详情
    pub skips: Vec<(String, String)>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Computed(r) => {
                self.computed += 1;
                self.results.push(r);
            }
            ProcessResult::Skipped(path, reason) => {
                self.skipped += 1;
                self.skips.push((path, reason));
            }
            ProcessResult::Failed(r, err) => {
                self.failed += 1;
                self.failures.push((r.dataset.clone(), err));
                self.results.push(r);
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.computed + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器，`jobs == 0` 时使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理文件列表
    pub fn run<F>(&self, files: Vec<PathBuf>, processor: F) -> Result<BatchResult>
    where
        F: Fn(&PathBuf) -> ProcessResult + Sync + Send,
    {
        let total = files.len();
        let pb = progress::create_progress_bar(total as u64, "Deriving");

        let failed_count = AtomicUsize::new(0);

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| UuError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let result = processor(file);

                    if let ProcessResult::Failed(_, _) = &result {
                        let n = failed_count.fetch_add(1, Ordering::Relaxed) + 1;
                        pb.set_message(format!("Deriving ({} failed)", n));
                    }

                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}
