use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use serde::{Serialize, Deserialize};
use engine::{Engine, GameEvent, Phase};
use rulebook::{BoardConfig, Destination};
use web_sys::console;

/// JS에서 사용할 게임 래퍼
#[wasm_bindgen]
pub struct Game {
    engine: Engine,
    /// 엔진 알림 큐 (drain_events로 꺼냄)
    events: Rc<RefCell<Vec<GameEvent>>>,
}

/// JS로 전달할 기물 정보
#[derive(Serialize, Deserialize)]
pub struct JsPiece {
    pub id: usize,
    pub kind: String,
    pub visual_tag: String,
    pub owner: u8,
    pub x: i32,
    pub y: i32,
    pub can_move: bool,
}

/// JS로 전달할 이동 정보
#[derive(Serialize, Deserialize)]
pub struct JsMove {
    pub from_x: i32,
    pub from_y: i32,
    pub to_x: i32,
    pub to_y: i32,
    pub is_capture: bool,
    pub captured: Option<usize>,
}

/// JS로 전달할 게임 상태
#[derive(Serialize, Deserialize)]
pub struct JsGameState {
    pub width: i32,
    pub height: i32,
    pub pieces: Vec<JsPiece>,
    pub current_player: u8,
    pub current_player_name: String,
    pub step: u32,
    pub phase: String, // "idle", "awaiting_move", "terminal"
    pub is_game_over: bool,
    pub winners: Vec<u8>,
}

/// JS로 전달할 알림
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsEvent {
    Moved {
        piece: usize,
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
        captured: Option<usize>,
    },
    Promoted {
        piece: usize,
        kind: String,
        visual_tag: String,
    },
    TurnAdvanced {
        player: u8,
    },
    GameEnded {
        winners: Vec<u8>,
    },
}

#[wasm_bindgen]
impl Game {
    /// 기본 10x10 설정으로 새 게임 생성
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Game, JsValue> {
        Self::from_config(BoardConfig::standard())
    }

    /// JS 객체로 받은 설정으로 새 게임 생성
    #[wasm_bindgen]
    pub fn with_config(config: JsValue) -> Result<Game, JsValue> {
        Self::from_config(Self::parse_config(config)?)
    }

    /// 게임 초기화. config가 없으면 현재 설정 재사용
    #[wasm_bindgen]
    pub fn reset(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            self.engine.config().clone()
        } else {
            Self::parse_config(config)?
        };
        self.events.borrow_mut().clear();
        self.engine.reset(config).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// 게임 시작 (첫 플레이어의 이동 가능 기물 계산)
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<(), JsValue> {
        self.engine.start().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// 디버그 모드 설정 (행마 계산 추적)
    #[wasm_bindgen]
    pub fn set_debug(&mut self, enabled: bool) {
        self.engine.set_debug(enabled);
    }

    /// 현재 게임 상태를 JSON으로 반환
    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        let js_state = self.build_js_state();
        Ok(serde_wasm_bindgen::to_value(&js_state)?)
    }

    /// 특정 칸의 기물이 이번 턴에 갈 수 있는 칸 목록.
    /// Engine::legal_moves가 아니라 강제 잡기가 적용된 selectable_moves를 돌려줌
    /// (상대 기물이나 종료 후에는 빈 목록)
    #[wasm_bindgen]
    pub fn get_legal_moves(&self, x: i32, y: i32) -> Result<JsValue, JsValue> {
        let js_moves: Vec<JsMove> = match self.engine.piece_at(x, y) {
            Some(piece) => self.engine.selectable_moves(piece.id).iter().map(|m| {
                JsMove {
                    from_x: x,
                    from_y: y,
                    to_x: m.x,
                    to_y: m.y,
                    is_capture: m.is_capture(),
                    captured: m.captured,
                }
            }).collect(),
            None => Vec::new(),
        };

        Ok(serde_wasm_bindgen::to_value(&js_moves)?)
    }

    /// 기물 이동 실행. 허용되지 않은 수는 false
    #[wasm_bindgen]
    pub fn move_piece(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        let piece_id = match self.engine.piece_at(from_x, from_y) {
            Some(piece) => piece.id,
            None => return false,
        };

        let destination: Option<Destination> = self.engine
            .selectable_moves(piece_id)
            .iter()
            .find(|m| m.x == to_x && m.y == to_y)
            .copied();

        let Some(destination) = destination else {
            console::warn_1(&format!("이동할 수 없는 칸입니다: ({}, {}) -> ({}, {})",
                from_x, from_y, to_x, to_y).into());
            return false;
        };

        match self.engine.apply_move(piece_id, &destination) {
            Ok(()) => true,
            Err(e) => {
                console::warn_1(&e.to_string().into());
                false
            }
        }
    }

    /// 쌓인 알림을 꺼내서 반환
    #[wasm_bindgen]
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<GameEvent> = self.events.borrow_mut().drain(..).collect();
        let js_events: Vec<JsEvent> = events.iter().map(|e| self.event_to_js(e)).collect();
        Ok(serde_wasm_bindgen::to_value(&js_events)?)
    }

    /// 현재 플레이어
    #[wasm_bindgen]
    pub fn current_player(&self) -> u8 {
        self.engine.current_player()
    }

    /// 게임 종료 여부
    #[wasm_bindgen]
    pub fn is_game_over(&self) -> bool {
        self.engine.phase() == Phase::Terminal
    }

    /// 승자 목록 (종료 전에는 기물이 남은 모든 플레이어)
    #[wasm_bindgen]
    pub fn winners(&self) -> Vec<u8> {
        self.engine.winners().to_vec()
    }

    // === Private helpers ===

    fn from_config(config: BoardConfig) -> Result<Game, JsValue> {
        let mut engine = Engine::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        engine.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        Ok(Game { engine, events })
    }

    fn parse_config(config: JsValue) -> Result<BoardConfig, JsValue> {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("설정을 읽을 수 없습니다: {}", e)))
    }

    fn build_js_state(&self) -> JsGameState {
        let state = self.engine.state();
        let pieces: Vec<JsPiece> = state.registry.active_pieces().map(|p| {
            let (kind, visual_tag) = self.kind_strings(p.kind);
            JsPiece {
                id: p.id,
                kind,
                visual_tag,
                owner: p.owner,
                x: p.x,
                y: p.y,
                can_move: p.can_move,
            }
        }).collect();

        let phase = match self.engine.phase() {
            Phase::Idle => "idle",
            Phase::AwaitingMove => "awaiting_move",
            Phase::Terminal => "terminal",
        };

        JsGameState {
            width: state.config.width,
            height: state.config.height,
            pieces,
            current_player: state.current,
            current_player_name: state.current_player().map(|p| p.name.clone()).unwrap_or_default(),
            step: state.step,
            phase: phase.to_string(),
            is_game_over: self.engine.phase() == Phase::Terminal,
            winners: state.winners.clone(),
        }
    }

    fn kind_strings(&self, kind: usize) -> (String, String) {
        self.engine.config().kind(kind)
            .map(|k| (k.name.clone(), k.visual_tag.clone()))
            .unwrap_or_default()
    }

    fn event_to_js(&self, event: &GameEvent) -> JsEvent {
        match event {
            GameEvent::Moved { piece, from, to, captured } => JsEvent::Moved {
                piece: *piece,
                from_x: from.0,
                from_y: from.1,
                to_x: to.0,
                to_y: to.1,
                captured: *captured,
            },
            GameEvent::Promoted { piece, kind } => {
                let (kind, visual_tag) = self.kind_strings(*kind);
                JsEvent::Promoted { piece: *piece, kind, visual_tag }
            }
            GameEvent::TurnAdvanced { player } => JsEvent::TurnAdvanced { player: *player },
            GameEvent::GameEnded { winners } => JsEvent::GameEnded { winners: winners.clone() },
        }
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console::log_1(&"Checkers WASM initialized!".into());
}
