use clap::{ArgAction, Args, Parser, Subcommand};
use ebook_core::SimilarityKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// 使用指定的配置文件，而不是默认配置目录中的 cli.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 列出所有章节标题
    List {
        #[command(flatten)]
        book: BookArgs,
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
    /// 显示标题完全一致的章节内容
    Show {
        /// 章节标题（精确匹配）
        title: String,
        #[command(flatten)]
        book: BookArgs,
    },
    /// 按标题模糊搜索章节
    Search {
        /// 搜索关键词
        keyword: String,
        #[command(flatten)]
        book: BookArgs,
        #[command(flatten)]
        search: SearchArgs,
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
    /// 交互式搜索：先选择算法，再循环输入关键词，直接回车退出
    Interactive {
        #[command(flatten)]
        book: BookArgs,
        /// 相似度阈值 [0, 1]
        #[arg(short, long)]
        threshold: Option<f64>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct BookArgs {
    /// 电子书文件路径（不提供则使用配置文件中的 book）
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// 相似度算法：lcs 或 levenshtein
    #[arg(short, long)]
    pub algorithm: Option<SimilarityKind>,
    /// 相似度阈值 [0, 1]
    #[arg(short, long)]
    pub threshold: Option<f64>,
}
