use yew::prelude::*;

use crate::game::GameView;
use crate::rules::RulesView;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Screen {
    Start,
    Game,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Play,
    BackToMenu,
    OpenRules,
    CloseRules,
}

pub(crate) struct AppView {
    screen: Screen,
    rules_open: bool,
}

impl Component for AppView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            screen: Screen::Start,
            rules_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Play => {
                self.screen = Screen::Game;
                true
            }
            Msg::BackToMenu => {
                self.screen = Screen::Start;
                true
            }
            Msg::OpenRules => {
                self.rules_open = true;
                true
            }
            Msg::CloseRules => {
                self.rules_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_play = ctx.link().callback(|_: MouseEvent| Msg::Play);
        let cb_rules = ctx.link().callback(|_: MouseEvent| Msg::OpenRules);
        let cb_help = ctx.link().callback(|_| Msg::OpenRules);
        let cb_back = ctx.link().callback(|_| Msg::BackToMenu);
        let cb_close_rules = ctx.link().callback(|_| Msg::CloseRules);

        let screen = match self.screen {
            Screen::Start => html! {
                <section id="start-screen">
                    <h1>{"Connect Four"}</h1>
                    <button id="btn-start" onclick={cb_play}>{"Start game"}</button>
                    <button id="btn-rules" onclick={cb_rules}>{"How to play"}</button>
                </section>
            },
            Screen::Game => html! {
                <GameView
                    keys_enabled={!self.rules_open}
                    on_back={cb_back}
                    on_help={cb_help}
                />
            },
        };

        html! {
            <div class="quatrito">
                {screen}
                <RulesView open={self.rules_open} on_close={cb_close_rules}/>
            </div>
        }
    }
}
