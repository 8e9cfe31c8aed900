/// アルファベータ探索プレイヤー。
pub mod alphabeta;
/// 合法手からランダムに1手選ぶプレイヤー。
pub mod random;
pub mod types;

pub type BestMove = types::BestMove;
pub type Move = crate::engine::rules::Move;
