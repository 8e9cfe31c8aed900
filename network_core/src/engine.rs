/// 盤面と接続グラフ（隣接関係の増分更新）の実装。
pub mod board;
/// ネットワーク（ゴール間の接続）判定の実装。
pub mod network;
/// 手の合法性・段階の判定と、盤面への適用。
pub mod rules;
pub mod types;

pub type Board = board::Board;
pub type BoardError = board::BoardError;
pub type Color = types::Color;
pub type Direction = types::Direction;
pub type Move = rules::Move;
pub type MoveError = rules::MoveError;
pub type NetworkScan = network::NetworkScan;
pub type Phase = rules::Phase;
pub type Square = types::Square;
