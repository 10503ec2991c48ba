use gloo::events::EventListener;
use quatrito_core as game;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::score::ScorePanel;
use crate::utils::LocalOrDefault;

/// What a rendered slot shows: the engine cell plus the view-only ghost of
/// where the next token would land.
#[derive(Copy, Clone, Debug, PartialEq)]
enum SlotState {
    Empty,
    Token(game::Player),
    Preview(game::Player),
}

const fn player_class(player: game::Player) -> &'static str {
    match player {
        game::Player::One => "player1",
        game::Player::Two => "player2",
    }
}

fn slot_classes(slot: SlotState, winning: bool, just_dropped: bool) -> Classes {
    let mut class = classes!(
        "slot",
        match slot {
            SlotState::Empty => classes!(),
            SlotState::Token(player) => classes!(player_class(player)),
            SlotState::Preview(player) => classes!("drop-preview", player_class(player)),
        }
    );
    if winning {
        class.push("winning");
    }
    if just_dropped {
        class.push("just-dropped");
    }
    class
}

fn end_message(engine: &game::GameEngine) -> Option<String> {
    match engine.state() {
        game::GameState::Won => engine
            .winner()
            .map(|winner| format!("Player {} wins!", winner.number())),
        game::GameState::Drawn => Some("It's a draw!".to_string()),
        _ => None,
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum CellMsg {
    Click(game::Coord),
    Enter(game::Coord),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    slot: SlotState,
    #[prop_or_default]
    winning: bool,
    #[prop_or_default]
    just_dropped: bool,
    callback: Callback<CellMsg>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        slot,
        winning,
        just_dropped,
        callback,
    } = props.clone();

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(CellMsg::Click(col)))
    };
    let onmouseenter = Callback::from(move |_: MouseEvent| callback.emit(CellMsg::Enter(col)));

    html! {
        <div
            class="cell"
            role="gridcell"
            data-row={row.to_string()}
            data-col={col.to_string()}
            {onclick}
            {onmouseenter}
        >
            <div class={slot_classes(slot, winning, just_dropped)}/>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Column-selection keys are ignored while a modal is open.
    #[prop_or(true)]
    pub keys_enabled: bool,
    pub on_back: Callback<()>,
    pub on_help: Callback<()>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Cell(CellMsg),
    BoardLeave,
    MoveSelection(i8),
    DropSelected,
    Replay,
    ResetScores,
}

pub(crate) struct GameView {
    engine: game::GameEngine,
    scores: game::ScoreBoard,
    last_drop: Option<game::Coord2>,
    preview_col: Option<game::Coord>,
    selected_col: game::Coord,
    _keydown: EventListener,
}

impl GameView {
    fn create_keydown(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&gloo::utils::document(), "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let msg = match event.key().as_str() {
                "ArrowLeft" => Msg::MoveSelection(-1),
                "ArrowRight" => Msg::MoveSelection(1),
                "Enter" | " " => Msg::DropSelected,
                _ => return,
            };
            event.prevent_default();
            link.send_message(msg);
        })
    }

    fn play_column(&mut self, col: game::Coord) -> bool {
        match self.engine.apply_move(col) {
            Ok(outcome) => {
                self.last_drop = Some(outcome.coords());
                match outcome {
                    game::DropOutcome::Won(_, line) => self.record(line.player.into()),
                    game::DropOutcome::Drawn(_) => self.record(game::GameResult::Draw),
                    game::DropOutcome::Placed(_) => {}
                }
                true
            }
            Err(err) => {
                log::debug!("move rejected in column {}: {}", col, err);
                false
            }
        }
    }

    fn record(&mut self, result: game::GameResult) {
        self.scores.record(result);
        self.scores.local_save();
    }

    fn preview_slot(&self) -> Option<game::Coord2> {
        if self.engine.is_finished() {
            return None;
        }
        let col = self.preview_col?;
        let row = self.engine.lowest_open_row(col)?;
        Some((row, col))
    }

    fn slot_state(&self, coords: game::Coord2, preview: Option<game::Coord2>) -> SlotState {
        match self.engine.cell_at(coords).player() {
            Some(player) => SlotState::Token(player),
            None if preview == Some(coords) => SlotState::Preview(self.engine.current_player()),
            None => SlotState::Empty,
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            engine: game::GameEngine::new(),
            // loaded once per tab; missing or unreadable storage starts a
            // zeroed ledger (see LocalOrDefault)
            scores: game::ScoreBoard::local_or_default(),
            last_drop: None,
            preview_col: None,
            selected_col: game::COLS / 2,
            _keydown: Self::create_keydown(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Cell(CellMsg::Click(col)) => self.play_column(col),
            Msg::Cell(CellMsg::Enter(col)) => {
                self.preview_col = Some(col);
                self.selected_col = col;
                true
            }
            Msg::BoardLeave => self.preview_col.take().is_some(),
            Msg::MoveSelection(delta) if ctx.props().keys_enabled => {
                self.selected_col = if delta < 0 {
                    self.selected_col.saturating_sub(1)
                } else {
                    (self.selected_col + 1).min(game::COLS - 1)
                };
                self.preview_col = Some(self.selected_col);
                true
            }
            Msg::DropSelected if ctx.props().keys_enabled => self.play_column(self.selected_col),
            Msg::MoveSelection(_) | Msg::DropSelected => false,
            Msg::Replay => {
                self.engine.reset();
                self.last_drop = None;
                self.preview_col = None;
                self.selected_col = game::COLS / 2;
                true
            }
            Msg::ResetScores => {
                self.scores.reset();
                self.scores.local_save();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let preview = self.preview_slot();
        let winning_line = self.engine.winning_line();

        let cb_cell = ctx.link().callback(Msg::Cell);
        let cb_replay = ctx.link().callback(|_: MouseEvent| Msg::Replay);
        let cb_reset = ctx.link().callback(|_: MouseEvent| Msg::ResetScores);
        let on_board_leave = ctx.link().callback(|_: MouseEvent| Msg::BoardLeave);
        let cb_back = {
            let on_back = ctx.props().on_back.clone();
            Callback::from(move |_: MouseEvent| on_back.emit(()))
        };
        let cb_help = {
            let on_help = ctx.props().on_help.clone();
            Callback::from(move |_: MouseEvent| on_help.emit(()))
        };

        let turn = (!self.engine.is_finished()).then(|| {
            let player = self.engine.current_player();
            html! {
                <p id="turn-display" class={classes!("turn", player_class(player))}>
                    {format!("Player {}'s turn", player.number())}
                </p>
            }
        });
        let message = end_message(&self.engine).map(|text| {
            let class = if self.engine.state() == game::GameState::Won {
                "game-message win"
            } else {
                "game-message"
            };
            html! { <p id="game-message" {class}>{text}</p> }
        });

        html! {
            <section id="game-screen">
                <nav>
                    <button id="btn-back-menu" onclick={cb_back}>{"Back to menu"}</button>
                    <button id="btn-replay" onclick={cb_replay}>{"Play again"}</button>
                    <button id="btn-help" onclick={cb_help}>{"How to play"}</button>
                </nav>
                {for turn}
                {for message}
                <div id="board" role="grid" onmouseleave={on_board_leave}>
                    {
                        for (0..game::ROWS).map(|row| html! {
                            <div class="board-row" role="row">
                                {
                                    for (0..game::COLS).map(|col| {
                                        let coords = (row, col);
                                        let slot = self.slot_state(coords, preview);
                                        let winning = winning_line
                                            .map_or(false, |line| line.contains(coords));
                                        let just_dropped = self.last_drop == Some(coords);
                                        let callback = cb_cell.clone();
                                        html! {
                                            <CellView {row} {col} {slot} {winning} {just_dropped} {callback}/>
                                        }
                                    })
                                }
                            </div>
                        })
                    }
                </div>
                <ScorePanel scores={self.scores.clone()} on_reset={cb_reset}/>
            </section>
        }
    }
}
