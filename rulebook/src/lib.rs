use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 디버그 로그 출력 (WASM 환경에서는 JS console.log로 전달)
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
pub fn log_debug(msg: &str) {
    log(msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_debug(msg: &str) {
    println!("DEBUG: {}", msg);
}

/// 진영 (0 = 흑, 1 = 백)
pub type Side = u8;
/// 기물 종류 테이블의 인덱스
pub type KindId = usize;
/// 엔진이 부여하는 기물 번호
pub type PieceId = usize;

pub const BLACK: Side = 0;
pub const WHITE: Side = 1;

/// 이동 벡터: (dx, dy) 방향으로 최대 max_steps 칸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveVector {
    pub dx: i32,
    pub dy: i32,
    pub max_steps: u32,
}

impl MoveVector {
    pub const fn new(dx: i32, dy: i32, max_steps: u32) -> Self {
        Self { dx, dy, max_steps }
    }

    /// 뒤로 잡기용 역방향 벡터
    pub fn reversed(&self) -> Self {
        Self::new(self.dx.saturating_neg(), self.dy.saturating_neg(), self.max_steps)
    }
}

/// 기물 종류 (설정 로드 후 불변)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceKind {
    pub name: String,
    /// 표현 계층용 태그. 엔진은 해석하지 않음
    pub visual_tag: String,
    pub owning_side: Side,
    #[serde(default)]
    pub check_backward_beat: bool,
    pub moves: Vec<MoveVector>,
    /// 승격 대상. 이미 승격된 기물은 자기 자신을 가리킴
    #[serde(default)]
    pub promotes_to: Option<KindId>,
}

impl PieceKind {
    pub fn new(name: &str, visual_tag: &str, owning_side: Side, moves: Vec<MoveVector>) -> Self {
        Self {
            name: name.to_string(),
            visual_tag: visual_tag.to_string(),
            owning_side,
            check_backward_beat: false,
            moves,
            promotes_to: None,
        }
    }

    pub fn with_backward_beat(mut self) -> Self {
        self.check_backward_beat = true;
        self
    }

    pub fn promoting_to(mut self, kind: KindId) -> Self {
        self.promotes_to = Some(kind);
        self
    }
}

/// 설정 오류
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("보드 크기가 올바르지 않습니다 ({width}x{height})")]
    NonPositiveDimensions { width: i32, height: i32 },

    #[error("기물 종류가 하나도 없습니다")]
    NoKinds,

    #[error("'{kind}'의 진영 {side}은(는) 존재하지 않습니다")]
    InvalidSide { kind: String, side: Side },

    #[error("'{kind}'에 승격 대상이 없습니다")]
    MissingPromotion { kind: String },

    #[error("'{kind}'의 승격 대상 {target}번이 존재하지 않습니다")]
    DanglingPromotion { kind: String, target: KindId },

    #[error("'{kind}'의 승격 대상이 다른 진영의 기물입니다")]
    PromotionChangesSide { kind: String },

    #[error("'{kind}'에 길이가 0인 이동 벡터가 있습니다")]
    DegenerateVector { kind: String },

    #[error("진영 {side}의 시작 기물 {kind}번이 올바르지 않습니다")]
    StartingKindMismatch { side: Side, kind: KindId },

    #[error("진영 {side}의 시작 위치 ({x}, {y})가 보드 밖입니다")]
    StartOutOfBounds { side: Side, x: i32, y: i32 },

    #[error("시작 위치 ({x}, {y})에 기물이 겹칩니다")]
    OverlappingStart { x: i32, y: i32 },

    #[error("진영 {side}의 승격 칸 ({x}, {y})가 보드 밖입니다")]
    BonusOutOfBounds { side: Side, x: i32, y: i32 },
}

/// 보드 규칙 설정. 외부에서 통째로 전달받음
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    pub kinds: Vec<PieceKind>,
    /// 진영별 시작 위치
    pub starting_positions: [Vec<(i32, i32)>; 2],
    /// 진영별 시작 기물 종류
    pub starting_kinds: [KindId; 2],
    /// 진영별 승격 칸
    pub bonus_cells: [Vec<(i32, i32)>; 2],
    pub player_names: [String; 2],
    pub white_is_first: bool,
    pub is_beat_back_allowed: bool,
    pub is_beat_necessarily: bool,
}

impl BoardConfig {
    pub const BLACK_MAN: KindId = 0;
    pub const WHITE_MAN: KindId = 1;
    pub const BLACK_KING: KindId = 2;
    pub const WHITE_KING: KindId = 3;

    /// 기본 10x10 보드 (어두운 칸 = x + y 홀수, 진영당 3줄)
    pub fn standard() -> Self {
        let width = 10;
        let height = 10;

        let king_moves = vec![
            MoveVector::new(-1, -1, 8),
            MoveVector::new(1, -1, 8),
            MoveVector::new(-1, 1, 8),
            MoveVector::new(1, 1, 8),
        ];

        let kinds = vec![
            PieceKind::new("흑 말", "check black", BLACK, vec![
                MoveVector::new(-1, 1, 1),
                MoveVector::new(1, 1, 1),
            ])
            .with_backward_beat()
            .promoting_to(Self::BLACK_KING),
            PieceKind::new("백 말", "check white", WHITE, vec![
                MoveVector::new(-1, -1, 1),
                MoveVector::new(1, -1, 1),
            ])
            .with_backward_beat()
            .promoting_to(Self::WHITE_KING),
            PieceKind::new("흑 킹", "check black king", BLACK, king_moves.clone())
                .promoting_to(Self::BLACK_KING),
            PieceKind::new("백 킹", "check white king", WHITE, king_moves)
                .promoting_to(Self::WHITE_KING),
        ];

        let dark_cells = |rows: std::ops::RangeInclusive<i32>| -> Vec<(i32, i32)> {
            rows.flat_map(|y| (0..width).map(move |x| (x, y)))
                .filter(|(x, y)| (x + y) % 2 == 1)
                .collect()
        };

        Self {
            width,
            height,
            kinds,
            starting_positions: [dark_cells(0..=2), dark_cells(7..=9)],
            starting_kinds: [Self::BLACK_MAN, Self::WHITE_MAN],
            bonus_cells: [dark_cells(9..=9), dark_cells(0..=0)],
            player_names: ["흑".to_string(), "백".to_string()],
            white_is_first: true,
            is_beat_back_allowed: true,
            is_beat_necessarily: false,
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn kind(&self, id: KindId) -> Option<&PieceKind> {
        self.kinds.get(id)
    }

    /// 첫 수를 두는 진영
    pub fn first_side(&self) -> Side {
        if self.white_is_first {
            WHITE
        } else {
            BLACK
        }
    }

    /// 설정 검증. 엔진은 검증을 통과한 설정만 설치함
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.kinds.is_empty() {
            return Err(ConfigError::NoKinds);
        }

        for kind in &self.kinds {
            if kind.owning_side > WHITE {
                return Err(ConfigError::InvalidSide {
                    kind: kind.name.clone(),
                    side: kind.owning_side,
                });
            }

            let target = kind.promotes_to.ok_or_else(|| ConfigError::MissingPromotion {
                kind: kind.name.clone(),
            })?;
            let promoted = self.kinds.get(target).ok_or_else(|| ConfigError::DanglingPromotion {
                kind: kind.name.clone(),
                target,
            })?;
            if promoted.owning_side != kind.owning_side {
                return Err(ConfigError::PromotionChangesSide {
                    kind: kind.name.clone(),
                });
            }

            if kind.moves.iter().any(|v| v.max_steps == 0 || (v.dx == 0 && v.dy == 0)) {
                return Err(ConfigError::DegenerateVector {
                    kind: kind.name.clone(),
                });
            }
        }

        let mut occupied = HashSet::new();
        for side in [BLACK, WHITE] {
            let kind = self.starting_kinds[side as usize];
            match self.kinds.get(kind) {
                Some(k) if k.owning_side == side => {}
                _ => return Err(ConfigError::StartingKindMismatch { side, kind }),
            }

            for &(x, y) in &self.starting_positions[side as usize] {
                if !self.in_bounds(x, y) {
                    return Err(ConfigError::StartOutOfBounds { side, x, y });
                }
                if !occupied.insert((x, y)) {
                    return Err(ConfigError::OverlappingStart { x, y });
                }
            }

            for &(x, y) in &self.bonus_cells[side as usize] {
                if !self.in_bounds(x, y) {
                    return Err(ConfigError::BonusOutOfBounds { side, x, y });
                }
            }
        }

        Ok(())
    }
}

/// 칸 조회 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// 보드 밖
    Blocked,
    Occupied { piece: PieceId, side: Side },
}

/// 행마 계산용 보드 상태 (엔진에서 제공)
#[derive(Debug, Clone)]
pub struct BoardState {
    pub board_width: i32,
    pub board_height: i32,
    pub piece_x: i32,
    pub piece_y: i32,
    pub side: Side,
    /// (x, y) -> (piece id, side). 살아있는 기물만 들어감
    pub pieces: HashMap<(i32, i32), (PieceId, Side)>,
}

impl BoardState {
    pub fn new(board_width: i32, board_height: i32) -> Self {
        Self {
            board_width,
            board_height,
            piece_x: 0,
            piece_y: 0,
            side: BLACK,
            pieces: HashMap::new(),
        }
    }

    pub fn place(&mut self, x: i32, y: i32, piece: PieceId, side: Side) {
        self.pieces.insert((x, y), (piece, side));
    }

    /// 움직일 기물 지정
    pub fn focus(&mut self, x: i32, y: i32, side: Side) {
        self.piece_x = x;
        self.piece_y = y;
        self.side = side;
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.board_width && y >= 0 && y < self.board_height
    }

    /// (x, y) 칸에 무엇이 있는지. 보드 밖은 오류가 아니라 Blocked
    pub fn occupancy(&self, x: i32, y: i32) -> Cell {
        if !self.in_bounds(x, y) {
            return Cell::Blocked;
        }
        match self.pieces.get(&(x, y)) {
            Some(&(piece, side)) => Cell::Occupied { piece, side },
            None => Cell::Empty,
        }
    }
}

/// 이동 가능한 목적지
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
    pub x: i32,
    pub y: i32,
    pub captured: Option<PieceId>,
}

impl Destination {
    pub fn step(x: i32, y: i32) -> Self {
        Self { x, y, captured: None }
    }

    pub fn capture(x: i32, y: i32, captured: PieceId) -> Self {
        Self { x, y, captured: Some(captured) }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// 이동 벡터를 따라 목적지를 계산
#[derive(Debug, Clone)]
pub struct MoveGenerator {
    beat_back_allowed: bool,
    pub debug: bool,
}

impl MoveGenerator {
    pub fn new(beat_back_allowed: bool) -> Self {
        Self {
            beat_back_allowed,
            debug: false,
        }
    }

    /// 디버그 모드 설정
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    fn add_destination(&self, destinations: &mut Vec<Destination>, destination: Destination) {
        if self.debug {
            log_debug(&format!("    → Destination: ({}, {}) captured={:?}",
                destination.x, destination.y, destination.captured));
        }
        destinations.push(destination);
    }

    /// board.piece_x, board.piece_y에 있는 kind 기물의 목적지 목록.
    /// 순서: 선언된 벡터 순서, 전진 벡터 전체 다음에 역방향 잡기
    pub fn generate(&self, kind: &PieceKind, board: &BoardState) -> Vec<Destination> {
        if self.debug {
            log_debug(&format!("[MoveGenerator] {} at ({}, {})",
                kind.name, board.piece_x, board.piece_y));
        }

        let mut destinations = Vec::new();
        for vector in &kind.moves {
            self.walk(*vector, board, false, &mut destinations);
        }

        // 뒤로 잡기: 기물과 전역 설정 둘 다 허용해야 함. 이동은 만들지 않음
        if kind.check_backward_beat && self.beat_back_allowed {
            for vector in &kind.moves {
                self.walk(vector.reversed(), board, true, &mut destinations);
            }
        }

        destinations
    }

    fn walk(&self, vector: MoveVector, board: &BoardState, captures_only: bool, destinations: &mut Vec<Destination>) {
        let mut x = board.piece_x;
        let mut y = board.piece_y;

        for _ in 0..vector.max_steps {
            // i32 범위를 넘는 칸은 보드 밖
            (x, y) = match offset(x, y, vector) {
                Some(next) => next,
                None => return,
            };

            match board.occupancy(x, y) {
                Cell::Empty => {
                    if !captures_only {
                        self.add_destination(destinations, Destination::step(x, y));
                    }
                }
                Cell::Occupied { piece, side } if side != board.side => {
                    if let Some((land_x, land_y)) = offset(x, y, vector) {
                        if board.occupancy(land_x, land_y) == Cell::Empty {
                            self.add_destination(destinations, Destination::capture(land_x, land_y, piece));
                        }
                    }
                    // 한 벡터에서 잡기는 하나뿐
                    return;
                }
                Cell::Occupied { .. } | Cell::Blocked => return,
            }
        }
    }
}

fn offset(x: i32, y: i32, vector: MoveVector) -> Option<(i32, i32)> {
    Some((x.checked_add(vector.dx)?, y.checked_add(vector.dy)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_board(x: i32, y: i32, side: Side) -> BoardState {
        let mut board = BoardState::new(10, 10);
        board.focus(x, y, side);
        board
    }

    fn standard_kind(id: KindId) -> PieceKind {
        BoardConfig::standard().kinds[id].clone()
    }

    #[test]
    fn test_standard_config_is_valid() {
        let config = BoardConfig::standard();
        assert!(config.validate().is_ok());
        assert_eq!(config.starting_positions[0].len(), 15);
        assert_eq!(config.starting_positions[1].len(), 15);
        assert!(config.bonus_cells[0].contains(&(0, 9)));
        assert!(config.bonus_cells[1].contains(&(1, 0)));
        assert_eq!(config.first_side(), WHITE);
    }

    #[test]
    fn test_validate_dimensions() {
        let mut config = BoardConfig::standard();
        config.width = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveDimensions { width: 0, height: 10 })
        );
    }

    #[test]
    fn test_validate_missing_promotion() {
        let mut config = BoardConfig::standard();
        config.kinds[BoardConfig::WHITE_KING].promotes_to = None;
        assert!(matches!(config.validate(), Err(ConfigError::MissingPromotion { .. })));

        config.kinds[BoardConfig::WHITE_KING].promotes_to = Some(42);
        assert!(matches!(config.validate(), Err(ConfigError::DanglingPromotion { target: 42, .. })));

        // 흑 말이 백 킹으로 승격하면 안 됨
        config.kinds[BoardConfig::WHITE_KING].promotes_to = Some(BoardConfig::WHITE_KING);
        config.kinds[BoardConfig::BLACK_MAN].promotes_to = Some(BoardConfig::WHITE_KING);
        assert!(matches!(config.validate(), Err(ConfigError::PromotionChangesSide { .. })));
    }

    #[test]
    fn test_validate_starting_positions() {
        let mut config = BoardConfig::standard();
        config.starting_positions[1].push((10, 3));
        assert_eq!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds { side: 1, x: 10, y: 3 })
        );

        let mut config = BoardConfig::standard();
        config.starting_positions[1].push((1, 0));
        assert_eq!(config.validate(), Err(ConfigError::OverlappingStart { x: 1, y: 0 }));

        let mut config = BoardConfig::standard();
        config.starting_kinds[0] = BoardConfig::WHITE_MAN;
        assert!(matches!(config.validate(), Err(ConfigError::StartingKindMismatch { side: 0, .. })));
    }

    #[test]
    fn test_validate_degenerate_vector() {
        let mut config = BoardConfig::standard();
        config.kinds[BoardConfig::BLACK_MAN].moves.push(MoveVector::new(1, 1, 0));
        assert!(matches!(config.validate(), Err(ConfigError::DegenerateVector { .. })));

        let mut config = BoardConfig::standard();
        config.kinds[BoardConfig::WHITE_KING].moves.push(MoveVector::new(0, 0, 3));
        assert!(matches!(config.validate(), Err(ConfigError::DegenerateVector { .. })));
    }

    #[test]
    fn test_validate_kinds() {
        let mut config = BoardConfig::standard();
        config.kinds.clear();
        assert_eq!(config.validate(), Err(ConfigError::NoKinds));

        let mut config = BoardConfig::standard();
        config.kinds[BoardConfig::BLACK_MAN].owning_side = 2;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSide { side: 2, .. })));
    }

    #[test]
    fn test_validate_bonus_cells() {
        let mut config = BoardConfig::standard();
        config.bonus_cells[0].push((3, 10));
        assert_eq!(
            config.validate(),
            Err(ConfigError::BonusOutOfBounds { side: 0, x: 3, y: 10 })
        );

        let mut config = BoardConfig::standard();
        config.bonus_cells[1].push((-1, 0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::BonusOutOfBounds { side: 1, x: -1, y: 0 })
        );
    }

    #[test]
    fn test_huge_vector_is_blocked() {
        // 검증은 통과하지만 첫 칸부터 i32 범위 밖
        let mut kind = standard_kind(BoardConfig::WHITE_MAN);
        kind.moves.push(MoveVector::new(i32::MAX, 0, 1));
        kind.moves.push(MoveVector::new(i32::MIN, i32::MIN, 3));
        let mut config = BoardConfig::standard();
        config.kinds[BoardConfig::WHITE_MAN] = kind.clone();
        assert!(config.validate().is_ok());

        let mut board = make_board(5, 6, WHITE);
        board.place(6, 7, 3, BLACK);
        let moves = MoveGenerator::new(true).generate(&kind, &board);
        assert_eq!(moves, vec![
            Destination::step(4, 5),
            Destination::step(6, 5),
            Destination::capture(7, 8, 3),
        ]);

        // 잡을 기물 뒤 착지 칸이 i32 범위 밖
        let mut board = make_board(i32::MAX - 3, 0, WHITE);
        board.board_width = i32::MAX;
        board.place(i32::MAX - 1, 0, 4, BLACK);
        let jumper = PieceKind::new("jumper", "", WHITE, vec![MoveVector::new(2, 0, 1)]);
        let moves = MoveGenerator::new(true).generate(&jumper, &board);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_occupancy() {
        let mut board = make_board(0, 0, BLACK);
        board.place(3, 3, 7, WHITE);

        assert_eq!(board.occupancy(3, 3), Cell::Occupied { piece: 7, side: WHITE });
        assert_eq!(board.occupancy(4, 4), Cell::Empty);
        assert_eq!(board.occupancy(-1, 0), Cell::Blocked);
        assert_eq!(board.occupancy(0, 10), Cell::Blocked);
    }

    #[test]
    fn test_simple_moves() {
        let generator = MoveGenerator::new(true);
        let board = make_board(1, 2, BLACK);
        let moves = generator.generate(&standard_kind(BoardConfig::BLACK_MAN), &board);

        assert_eq!(moves, vec![Destination::step(0, 3), Destination::step(2, 3)]);
    }

    #[test]
    fn test_simple_moves_at_edge() {
        let generator = MoveGenerator::new(true);
        let board = make_board(0, 2, BLACK);
        let moves = generator.generate(&standard_kind(BoardConfig::BLACK_MAN), &board);

        // (-1, 3)은 보드 밖
        assert_eq!(moves, vec![Destination::step(1, 3)]);
    }

    #[test]
    fn test_blocked_by_friendly() {
        let generator = MoveGenerator::new(true);
        let mut board = make_board(1, 2, BLACK);
        board.place(2, 3, 1, BLACK);
        let moves = generator.generate(&standard_kind(BoardConfig::BLACK_MAN), &board);

        assert_eq!(moves, vec![Destination::step(0, 3)]);
    }

    #[test]
    fn test_capture_enemy() {
        let generator = MoveGenerator::new(true);
        let mut board = make_board(1, 2, BLACK);
        board.place(2, 3, 5, WHITE);
        let moves = generator.generate(&standard_kind(BoardConfig::BLACK_MAN), &board);

        assert_eq!(moves, vec![Destination::step(0, 3), Destination::capture(3, 4, 5)]);
        // 적 뒤로 그냥 이동하는 목적지는 없음
        assert!(!moves.iter().any(|m| m.x == 2 && m.y == 3));
    }

    #[test]
    fn test_capture_needs_empty_landing() {
        let generator = MoveGenerator::new(true);
        let mut board = make_board(1, 2, BLACK);
        board.place(2, 3, 5, WHITE);
        board.place(3, 4, 6, WHITE);
        let moves = generator.generate(&standard_kind(BoardConfig::BLACK_MAN), &board);
        assert_eq!(moves, vec![Destination::step(0, 3)]);

        // 착지 칸이 보드 밖
        let mut board = make_board(7, 8, BLACK);
        board.place(8, 9, 5, WHITE);
        let moves = generator.generate(&standard_kind(BoardConfig::BLACK_MAN), &board);
        assert_eq!(moves, vec![Destination::step(6, 9)]);
    }

    #[test]
    fn test_king_slide() {
        let generator = MoveGenerator::new(true);
        let board = make_board(0, 9, BLACK);
        let moves = generator.generate(&standard_kind(BoardConfig::BLACK_KING), &board);

        // (1, 8)부터 (8, 1)까지 8칸
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.captured.is_none()));
        assert!(moves.contains(&Destination::step(8, 1)));
        assert!(!moves.contains(&Destination::step(9, 0)));
    }

    #[test]
    fn test_king_capture_stops_vector() {
        let generator = MoveGenerator::new(true);
        let mut board = make_board(0, 9, BLACK);
        board.place(3, 6, 11, WHITE);
        let moves = generator.generate(&standard_kind(BoardConfig::BLACK_KING), &board);

        assert_eq!(moves, vec![
            Destination::step(1, 8),
            Destination::step(2, 7),
            Destination::capture(4, 5, 11),
        ]);
    }

    #[test]
    fn test_backward_capture() {
        let mut board = make_board(3, 4, BLACK);
        board.place(2, 3, 9, WHITE);
        let kind = standard_kind(BoardConfig::BLACK_MAN);

        let moves = MoveGenerator::new(true).generate(&kind, &board);
        assert_eq!(moves, vec![
            Destination::step(2, 5),
            Destination::step(4, 5),
            Destination::capture(1, 2, 9),
        ]);

        // 전역 설정 off
        let moves = MoveGenerator::new(false).generate(&kind, &board);
        assert!(!moves.iter().any(|m| m.y < 4));

        // 기물 플래그 off
        let mut kind = kind;
        kind.check_backward_beat = false;
        let moves = MoveGenerator::new(true).generate(&kind, &board);
        assert!(!moves.iter().any(|m| m.y < 4));
    }

    #[test]
    fn test_no_backward_plain_moves() {
        let board = make_board(3, 4, BLACK);
        let moves = MoveGenerator::new(true).generate(&standard_kind(BoardConfig::BLACK_MAN), &board);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.y == 5));
    }
}
