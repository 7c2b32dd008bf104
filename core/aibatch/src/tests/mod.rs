//! 結合テスト（実ファイルとスタブ Completion で UseCase / Runner を動かす）

mod run_app_tests;
