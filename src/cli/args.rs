// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueHint};
use sloc_census_domain::config::{DEFAULT_PRIMARY_LANGUAGE, DEFAULT_UNIQUE_THRESHOLD};

use super::{
    parsers,
    value_enum::{CliLogLevel, CliOutputFormat},
};

#[derive(Parser, Debug)]
#[command(
    name = "sloc_census",
    version,
    about = "ローカルに clone したリポジトリ群の SLOC と依存クレートの集計ツール"
)]
pub struct Args {
    #[command(flatten)]
    pub log: LogOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// リポジトリを走査して言語別 SLOC と依存クレートを報告する
    Scan(ScanArgs),
    /// 保存済みのリポジトリレポートを集計する
    Summarize(SummarizeArgs),
}

#[derive(ClapArgs, Debug)]
pub struct LogOptions {
    /// 詳細ログ (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "ログ")]
    pub verbose: u8,

    /// ログレベルを直接指定（-v / --quiet より優先）
    #[arg(long, value_enum, global = true, help_heading = "ログ")]
    pub log_level: Option<CliLogLevel>,

    /// エラー以外のログを抑制
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = "ログ")]
    pub quiet: bool,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 出力先ファイル（省略時は標準出力）
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanArgs {
    #[command(flatten)]
    pub output: OutputOptions,

    /// リポジトリごとに `<repo>.json` を書き出すディレクトリ
    #[arg(long, value_hint = ValueHint::DirPath, help_heading = "出力")]
    pub out_dir: Option<PathBuf>,

    /// ファイル単位の計測結果も出力
    #[arg(long, help_heading = "出力")]
    pub per_file: bool,

    /// 比率を算出する主言語
    #[arg(long, default_value = DEFAULT_PRIMARY_LANGUAGE, help_heading = "集計")]
    pub primary: String,

    /// 言語構文定義 (YAML)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "集計")]
    pub syntax_file: Option<PathBuf>,

    /// 計測対象の拡張子 (例: rs,toml)
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub ext: Vec<String>,

    /// 除外するディレクトリの glob（繰り返し指定可。`{gen,out}` のような波括弧も使える）
    #[arg(long, help_heading = "フィルタ")]
    pub exclude_dir: Vec<String>,

    #[arg(long, help_heading = "走査/入力")]
    pub hidden: bool,

    #[arg(long, help_heading = "走査/入力")]
    pub follow: bool,

    #[arg(long, help_heading = "走査/入力")]
    pub no_default_prune: bool,

    #[arg(long, value_parser = parsers::parse_usize_1_to_512, help_heading = "走査/入力")]
    pub jobs: Option<usize>,

    /// 読めないファイルをエラーとして扱う
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// リポジトリのルートディレクトリ
    #[arg(required = true, value_hint = ValueHint::DirPath, help_heading = "走査/入力")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub output: OutputOptions,

    /// この数以下のリポジトリでしか使われないクレートを「ユニーク」とみなす
    #[arg(long, default_value_t = DEFAULT_UNIQUE_THRESHOLD, value_parser = parsers::parse_positive_usize, help_heading = "集計")]
    pub threshold: usize,

    /// 集計から除外するクレート（既定の一覧に追加）
    #[arg(long, value_delimiter = ',', help_heading = "集計")]
    pub ignore_crate: Vec<String>,

    /// 既定の除外クレート一覧を使わない
    #[arg(long, help_heading = "集計")]
    pub no_default_ignores: bool,

    /// 壊れたレポートをエラーとして扱う
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// レポート JSON ファイル、または それを含むディレクトリ
    #[arg(required = true, value_hint = ValueHint::AnyPath, help_heading = "走査/入力")]
    pub reports: Vec<PathBuf>,
}
