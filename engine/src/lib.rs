use std::fmt;

use thiserror::Error;

// 규칙 설정과 행마 계산은 rulebook 사용
use rulebook::{log_debug, BoardState, MoveGenerator};

pub use rulebook::{
    BoardConfig, Cell, ConfigError, Destination, KindId, MoveVector, PieceId, PieceKind, Side,
    BLACK, WHITE,
};

/// 보드 좌표 (x, y)
pub type Position = (i32, i32);

/// 엔진 오류. 어떤 오류든 게임 상태는 바뀌지 않음
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("잘못된 수입니다: {0}")]
    InvalidMove(String),

    #[error("잘못된 설정입니다: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("게임이 이미 시작되었습니다")]
    AlreadyStarted,
}

/// 턴 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// start() 이전
    Idle,
    /// 현재 플레이어의 수를 기다리는 중
    AwaitingMove,
    /// 게임 종료
    Terminal,
}

/// 표현 계층에 보내는 알림
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Moved {
        piece: PieceId,
        from: Position,
        to: Position,
        captured: Option<PieceId>,
    },
    Promoted {
        piece: PieceId,
        kind: KindId,
    },
    TurnAdvanced {
        player: Side,
    },
    GameEnded {
        winners: Vec<Side>,
    },
}

/// 기물
#[derive(Debug, Clone)]
pub struct Piece {
    pub id: PieceId,
    pub kind: KindId,
    pub owner: Side,
    pub x: i32,
    pub y: i32,
    /// 잡히면 false. 다시 살아나지 않음
    pub active: bool,
    /// 이번 턴에 움직일 수 있는지
    pub can_move: bool,
    /// 이번 턴에 선택 가능한 목적지 (강제 잡기 적용 후)
    pub legal_moves: Vec<Destination>,
}

impl Piece {
    pub fn new(id: PieceId, kind: KindId, owner: Side, x: i32, y: i32) -> Self {
        Self {
            id,
            kind,
            owner,
            x,
            y,
            active: true,
            can_move: false,
            legal_moves: Vec::new(),
        }
    }

    pub fn pos(&self) -> Position {
        (self.x, self.y)
    }
}

/// 플레이어
#[derive(Debug, Clone)]
pub struct Player {
    pub id: Side,
    pub name: String,
    pub bonus_cells: Vec<Position>,
}

impl Player {
    pub fn new(id: Side, name: &str, bonus_cells: Vec<Position>) -> Self {
        Self {
            id,
            name: name.to_string(),
            bonus_cells,
        }
    }

    /// 승격 칸인지
    pub fn in_bonus_position(&self, x: i32, y: i32) -> bool {
        self.bonus_cells.contains(&(x, y))
    }
}

/// 기물과 플레이어 등록부
#[derive(Debug, Clone)]
pub struct Registry {
    players: Vec<Player>,
    pieces: Vec<Piece>,
}

impl Registry {
    /// 설정의 시작 배치로 기물 생성 (흑 먼저, 그다음 백)
    pub fn from_config(config: &BoardConfig) -> Self {
        let players = [BLACK, WHITE]
            .into_iter()
            .map(|side| {
                Player::new(
                    side,
                    &config.player_names[side as usize],
                    config.bonus_cells[side as usize].clone(),
                )
            })
            .collect();

        let mut pieces = Vec::new();
        for side in [BLACK, WHITE] {
            let kind = config.starting_kinds[side as usize];
            for &(x, y) in &config.starting_positions[side as usize] {
                let id = pieces.len();
                pieces.push(Piece::new(id, kind, side, x, y));
            }
        }

        Self { players, pieces }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, side: Side) -> Option<&Player> {
        self.players.iter().find(|p| p.id == side)
    }

    /// 보드 위에 남은 기물
    pub fn active_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(|p| p.active)
    }

    pub fn active_pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.active_pieces().filter(move |p| p.owner == side)
    }

    pub fn active_count(&self, side: Side) -> usize {
        self.active_pieces_of(side).count()
    }

    /// 잡힌 기물도 id로는 조회됨
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id)
    }

    pub fn piece_at(&self, x: i32, y: i32) -> Option<&Piece> {
        self.active_pieces().find(|p| p.x == x && p.y == y)
    }

    fn capture(&mut self, id: PieceId) {
        if let Some(piece) = self.pieces.get_mut(id) {
            piece.active = false;
            piece.can_move = false;
            piece.legal_moves.clear();
        }
    }
}

/// 게임 상태
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: BoardConfig,
    pub registry: Registry,
    pub current: Side,
    pub step: u32,
    pub winners: Vec<Side>,
}

impl GameState {
    /// 설정을 검증하고 초기 배치 생성
    pub fn new(config: BoardConfig) -> Result<Self, GameError> {
        config.validate()?;

        let registry = Registry::from_config(&config);
        let winners = registry.players().iter().map(|p| p.id).collect();
        Ok(Self {
            current: config.first_side(),
            config,
            registry,
            step: 0,
            winners,
        })
    }

    /// step번째 수를 두는 진영
    pub fn side_at(&self, step: u32) -> Side {
        ((self.config.first_side() as u32 + step) % 2) as Side
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.registry.player(self.current)
    }

    /// (x, y) 칸 조회. 보드 밖은 Blocked
    pub fn occupancy(&self, x: i32, y: i32) -> Cell {
        if !self.config.in_bounds(x, y) {
            return Cell::Blocked;
        }
        match self.registry.piece_at(x, y) {
            Some(piece) => Cell::Occupied {
                piece: piece.id,
                side: piece.owner,
            },
            None => Cell::Empty,
        }
    }

    /// GameState를 행마 계산용 BoardState로 변환
    fn to_board_state(&self) -> BoardState {
        let mut board = BoardState::new(self.config.width, self.config.height);
        for piece in self.registry.active_pieces() {
            board.place(piece.x, piece.y, piece.id, piece.owner);
        }
        board
    }
}

/// 알림 구독 핸들
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&GameEvent)>;

/// 턴 진행기. 모든 상태 변경은 reset / start / apply_move를 통해서만 일어남
pub struct Engine {
    state: GameState,
    phase: Phase,
    generator: MoveGenerator,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: usize,
    pub debug_mode: bool,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("phase", &self.phase)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("debug_mode", &self.debug_mode)
            .finish()
    }
}

impl Engine {
    pub fn new(config: BoardConfig) -> Result<Self, GameError> {
        let state = GameState::new(config)?;
        Ok(Self {
            generator: MoveGenerator::new(state.config.is_beat_back_allowed),
            state,
            phase: Phase::Idle,
            listeners: Vec::new(),
            next_listener_id: 0,
            debug_mode: false,
        })
    }

    /// 새 설정으로 초기화. 설정이 잘못되면 기존 상태 유지
    pub fn reset(&mut self, config: BoardConfig) -> Result<(), GameError> {
        let state = GameState::new(config)?;

        self.generator = MoveGenerator::new(state.config.is_beat_back_allowed);
        self.generator.set_debug(self.debug_mode);
        self.state = state;
        self.phase = Phase::Idle;

        if self.debug_mode {
            log_debug(&format!("[Engine] reset: {} pieces", self.state.registry.pieces.len()));
        }
        Ok(())
    }

    /// Idle -> AwaitingMove
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Idle {
            return Err(GameError::AlreadyStarted);
        }
        self.phase = Phase::AwaitingMove;
        self.begin_turn();
        Ok(())
    }

    /// 디버그 모드 설정 (행마 계산 추적 포함)
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug_mode = enabled;
        self.generator.set_debug(enabled);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&GameEvent) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &BoardConfig {
        &self.state.config
    }

    pub fn current_player(&self) -> Side {
        self.state.current
    }

    pub fn winners(&self) -> &[Side] {
        &self.state.winners
    }

    pub fn step(&self) -> u32 {
        self.state.step
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.state.registry.piece(id)
    }

    pub fn piece_at(&self, x: i32, y: i32) -> Option<&Piece> {
        self.state.registry.piece_at(x, y)
    }

    pub fn occupancy(&self, x: i32, y: i32) -> Cell {
        self.state.occupancy(x, y)
    }

    /// 기물의 목적지 계산. 상태를 바꾸지 않고 강제 잡기도 적용하지 않음
    pub fn legal_moves(&self, piece_id: PieceId) -> Vec<Destination> {
        let mut board = self.state.to_board_state();
        match self.state.registry.piece(piece_id) {
            Some(piece) if piece.active => self.moves_on(&mut board, piece),
            _ => Vec::new(),
        }
    }

    /// 이번 턴에 선택 가능한 목적지 (턴 경계에서 계산된 값)
    pub fn selectable_moves(&self, piece_id: PieceId) -> &[Destination] {
        self.state
            .registry
            .piece(piece_id)
            .map(|p| p.legal_moves.as_slice())
            .unwrap_or(&[])
    }

    /// 이번 턴에 움직일 수 있는 기물들
    pub fn movable_pieces(&self) -> Vec<PieceId> {
        self.state
            .registry
            .active_pieces()
            .filter(|p| p.can_move)
            .map(|p| p.id)
            .collect()
    }

    /// 수 적용. destination은 이 기물의 selectable_moves 중 하나여야 함
    pub fn apply_move(&mut self, piece_id: PieceId, destination: &Destination) -> Result<(), GameError> {
        if self.phase != Phase::AwaitingMove {
            return Err(GameError::InvalidMove(format!(
                "수를 둘 수 있는 상태가 아닙니다 ({:?})",
                self.phase
            )));
        }

        let (owner, kind, from) = {
            let piece = self
                .state
                .registry
                .piece(piece_id)
                .filter(|p| p.active)
                .ok_or_else(|| GameError::InvalidMove("기물을 찾을 수 없습니다".to_string()))?;

            if piece.owner != self.state.current {
                return Err(GameError::InvalidMove("자신의 기물이 아닙니다".to_string()));
            }
            if !piece.legal_moves.contains(destination) {
                return Err(GameError::InvalidMove(format!(
                    "({}, {})(으)로 이동할 수 없습니다",
                    destination.x, destination.y
                )));
            }
            (piece.owner, piece.kind, piece.pos())
        };
        let to = (destination.x, destination.y);

        if let Some(victim) = destination.captured {
            self.state.registry.capture(victim);
        }
        if let Some(piece) = self.state.registry.piece_mut(piece_id) {
            piece.x = to.0;
            piece.y = to.1;
        }

        if self.debug_mode {
            log_debug(&format!("[Engine] step {}: {:?} -> {:?} captured={:?}",
                self.state.step, from, to, destination.captured));
        }
        self.emit(GameEvent::Moved {
            piece: piece_id,
            from,
            to,
            captured: destination.captured,
        });

        // 승격은 현재 플레이어가 아니라 기물 자신의 진영 승격 칸으로 판정
        let reached_bonus = self
            .state
            .registry
            .player(owner)
            .map_or(false, |player| player.in_bonus_position(to.0, to.1));
        if reached_bonus {
            let promoted = self
                .state
                .config
                .kind(kind)
                .and_then(|k| k.promotes_to)
                .unwrap_or(kind);
            if let Some(piece) = self.state.registry.piece_mut(piece_id) {
                piece.kind = promoted;
            }
            if promoted != kind {
                self.emit(GameEvent::Promoted {
                    piece: piece_id,
                    kind: promoted,
                });
            }
        }

        // 다음 턴
        self.clear_movable();
        self.state.step += 1;
        self.begin_turn();

        Ok(())
    }

    /// 승자 갱신 후 현재 플레이어의 이동 가능 기물 계산
    fn begin_turn(&mut self) {
        let winners: Vec<Side> = self
            .state
            .registry
            .players()
            .iter()
            .map(|p| p.id)
            .filter(|&side| self.state.registry.active_count(side) > 0)
            .collect();
        self.state.winners = winners;

        if self.state.winners.len() != self.state.registry.players().len() {
            self.finish();
            return;
        }

        self.state.current = self.state.side_at(self.state.step);
        self.recompute_movable();

        // 기물은 있지만 움직일 수 없으면 패배
        if self.movable_pieces().is_empty() {
            let blocked = self.state.current;
            self.state.winners.retain(|&side| side != blocked);
            self.finish();
            return;
        }

        self.emit(GameEvent::TurnAdvanced {
            player: self.state.current,
        });
    }

    fn recompute_movable(&mut self) {
        self.clear_movable();

        let mut board = self.state.to_board_state();
        let mut computed: Vec<(PieceId, Vec<Destination>)> = self
            .state
            .registry
            .active_pieces_of(self.state.current)
            .map(|piece| (piece.id, self.moves_on(&mut board, piece)))
            .collect();

        // 강제 잡기: 한 기물이라도 잡을 수 있으면 진영 전체에서 일반 이동 제외
        let forced = self.state.config.is_beat_necessarily
            && computed
                .iter()
                .any(|(_, moves)| moves.iter().any(Destination::is_capture));
        if forced {
            for (_, moves) in computed.iter_mut() {
                moves.retain(Destination::is_capture);
            }
        }

        for (id, moves) in computed {
            if let Some(piece) = self.state.registry.piece_mut(id) {
                piece.can_move = !moves.is_empty();
                piece.legal_moves = moves;
            }
        }

        if self.debug_mode {
            log_debug(&format!("[Engine] side {} movable: {:?} (forced capture: {})",
                self.state.current, self.movable_pieces(), forced));
        }
    }

    fn moves_on(&self, board: &mut BoardState, piece: &Piece) -> Vec<Destination> {
        match self.state.config.kind(piece.kind) {
            Some(kind) => {
                board.focus(piece.x, piece.y, piece.owner);
                self.generator.generate(kind, board)
            }
            None => Vec::new(),
        }
    }

    fn clear_movable(&mut self) {
        for piece in self.state.registry.pieces.iter_mut() {
            piece.can_move = false;
            piece.legal_moves.clear();
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::Terminal;
        self.clear_movable();

        if self.debug_mode {
            log_debug(&format!("[Engine] game ended, winners: {:?}", self.state.winners));
        }
        let winners = self.state.winners.clone();
        self.emit(GameEvent::GameEnded { winners });
    }

    fn emit(&mut self, event: GameEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
