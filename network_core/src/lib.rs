//! Network（8×8 の接続ゲーム）の思考エンジン。
//!
//! このクレートは盤面・規則・ネットワーク判定を提供する `engine` と、
//! 手を選択するプレイヤー `ai` を提供します。
//! 対局の進行や UI は外部から `ai::types::Player` を通して利用することを想定しています。

#![forbid(unsafe_code)]

/// 盤面・接続グラフ・規則・ネットワーク判定を提供するモジュール。
pub mod engine;

/// プレイヤー（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
