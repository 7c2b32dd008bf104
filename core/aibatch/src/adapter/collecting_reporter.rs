//! テスト用: 報告メッセージをメモリに収集する Reporter 実装


#[cfg(test)]
pub use collecting::CollectingReporter;
