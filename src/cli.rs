use clap::Parser;
use std::path::PathBuf;

/// フォルダ内の画像をキャンバスに描画し、1つのZIPにまとめて保存するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 変換対象の画像が含まれるフォルダのパス
    #[arg(required = true)]
    pub input_dir: PathBuf,

    /// ZIPの出力先フォルダのパス (オプション: デフォルトは入力フォルダと同じ)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// 設定ファイル (TOML) のパス (オプション: デフォルトは組み込みの設定)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 保存するZIPのファイル名 (オプション: 設定ファイルの値を上書き)
    #[arg(short = 'n', long)]
    pub archive_name: Option<String>,
}
