//! The six built-in slide layouts.
//!
//! Everything in this module is hand-authored design data for the fixed
//! marketing deck, expressed as paint commands on the 1080x1350 canvas. The
//! compositions mirror the deck's visual language: brand-green and paper
//! alternating backgrounds, oversized display type, rotated-card stand-ins,
//! and a footer CTA bar on the closing slide.

use crate::rendering::paint::{
    Color, TextAlign, ALERT_RED, BRAND_BLACK, BRAND_GREEN, BRAND_GREEN_LIGHT, BRAND_PAPER,
};
use crate::rendering::scene::Scene;
use crate::{SLIDE_HEIGHT, SLIDE_WIDTH};

const PAD: i32 = 64;
const CENTER_X: i32 = (SLIDE_WIDTH / 2) as i32;

/// Build the scene for `index`, or `None` when the index has no template
pub fn slide_scene(index: usize) -> Option<Scene> {
    match index {
        0 => Some(slide_cover()),
        1 => Some(slide_three_seconds()),
        2 => Some(slide_tip_generic()),
        3 => Some(slide_tip_invisible_button()),
        4 => Some(slide_tip_single_yes()),
        5 => Some(slide_final_cta()),
        _ => None,
    }
}

/// Number of built-in templates
pub fn template_count() -> usize {
    6
}

// Grain texture stand-in: one translucent wash over the whole canvas
fn noise_overlay(scene: &mut Scene) {
    scene.fill_rect(
        0,
        0,
        SLIDE_WIDTH,
        SLIDE_HEIGHT,
        BRAND_PAPER.with_opacity(0.04),
    );
}

// Giant faded icon placeholder behind the content layer
fn background_disc(scene: &mut Scene, cx: i32, cy: i32, color: Color) {
    scene.stroke_circle(cx, cy, 450, 18, color.with_opacity(0.05));
}

fn brand_logo(scene: &mut Scene, cx: i32, cy: i32, dark: bool) {
    let (fill, ink) = if dark {
        (BRAND_GREEN, BRAND_PAPER)
    } else {
        (BRAND_PAPER, BRAND_GREEN)
    };
    scene.fill_circle(cx, cy, 24, fill);
    scene.stroke_circle(cx, cy, 24, 2, ink);
    scene.text(cx, cy - 12, "W", 24, ink, TextAlign::Center, 0);
}

fn slide_number(scene: &mut Scene, current: u32, dark: bool) {
    let ink = if dark { BRAND_PAPER } else { BRAND_GREEN };
    scene.text(
        (SLIDE_WIDTH as i32) - 48,
        (SLIDE_HEIGHT as i32) - 110,
        format!("{:02}", current),
        60,
        ink.with_opacity(0.3),
        TextAlign::Right,
        0,
    );
}

// Outline display type: four offset passes in the stroke color under one
// background-colored fill pass
fn outlined_text(scene: &mut Scene, x: i32, y: i32, text: &str, size: u32, stroke: Color, fill: Color) {
    let o = (size as i32 / 48).max(2);
    for (dx, dy) in [(-o, 0), (o, 0), (0, -o), (0, o)] {
        scene.text(x + dx, y + dy, text, size, stroke, TextAlign::Center, -8);
    }
    scene.text(x, y, text, size, fill, TextAlign::Center, -8);
}

// --------------------------
// Slide 0: cover ("ERRO FATAL")
// --------------------------
fn slide_cover() -> Scene {
    let mut scene = Scene::new(BRAND_GREEN);
    noise_overlay(&mut scene);
    background_disc(&mut scene, CENTER_X, 660, BRAND_PAPER);

    // Top bar: urgency pill + brand mark
    scene.fill_rect(PAD, 84, 232, 56, BRAND_PAPER.with_opacity(0.1));
    scene.stroke_rect(PAD, 84, 232, 56, 2, BRAND_PAPER.with_opacity(0.2));
    scene.fill_circle(PAD + 28, 112, 7, ALERT_RED);
    scene.text(PAD + 48, 100, "URGENTE", 22, BRAND_PAPER, TextAlign::Left, 4);
    brand_logo(&mut scene, (SLIDE_WIDTH as i32) - PAD - 24, 112, true);

    // Headline stack
    scene.text(
        CENTER_X,
        286,
        "Você está cometendo este",
        34,
        BRAND_PAPER.with_opacity(0.8),
        TextAlign::Center,
        2,
    );
    // X mark behind the display type
    scene.stroke_circle(CENTER_X, 610, 250, 12, ALERT_RED.with_opacity(0.4));
    scene.text(CENTER_X, 380, "ERRO", 250, BRAND_PAPER, TextAlign::Center, -20);
    outlined_text(&mut scene, CENTER_X, 650, "FATAL", 250, BRAND_PAPER, BRAND_GREEN);

    // Tilted callout card stand-in
    scene.fill_rect(CENTER_X - 330, 960, 660, 140, BRAND_PAPER);
    scene.text(
        CENTER_X,
        990,
        "Seu site pode estar",
        30,
        BRAND_GREEN,
        TextAlign::Center,
        2,
    );
    scene.text(
        CENTER_X,
        1034,
        "expulsando clientes",
        30,
        ALERT_RED,
        TextAlign::Center,
        2,
    );

    scene.text(
        CENTER_X,
        (SLIDE_HEIGHT as i32) - 88,
        "ARRASTA PRO LADO",
        20,
        BRAND_PAPER.with_opacity(0.4),
        TextAlign::Center,
        8,
    );
    scene
}

// --------------------------
// Slide 1: the three-second hook
// --------------------------
fn slide_three_seconds() -> Scene {
    let mut scene = Scene::new(BRAND_PAPER);
    background_disc(&mut scene, (SLIDE_WIDTH as i32) - 60, 675, BRAND_GREEN);

    scene.text(
        CENTER_X,
        200,
        "Você tem apenas",
        40,
        BRAND_GREEN,
        TextAlign::Center,
        2,
    );
    scene.text(CENTER_X - 90, 300, "3", 360, BRAND_GREEN, TextAlign::Center, 0);

    // "SEGUNDOS" tag beside the numeral
    scene.fill_rect(CENTER_X + 120, 480, 330, 70, BRAND_PAPER);
    scene.stroke_rect(CENTER_X + 120, 480, 330, 70, 3, BRAND_GREEN);
    scene.text(
        CENTER_X + 285,
        498,
        "SEGUNDOS",
        34,
        BRAND_GREEN,
        TextAlign::Center,
        2,
    );

    // Statement card with hard drop shadow
    scene.fill_rect(CENTER_X - 375, 795, 780, 300, BRAND_GREEN.with_opacity(0.2));
    scene.fill_rect(CENTER_X - 390, 780, 780, 300, BRAND_GREEN);
    scene.text(
        CENTER_X,
        830,
        "É o tempo que o visitante leva",
        28,
        BRAND_PAPER,
        TextAlign::Center,
        1,
    );
    scene.text(
        CENTER_X,
        886,
        "para decidir se te dá dinheiro",
        28,
        BRAND_PAPER,
        TextAlign::Center,
        1,
    );
    scene.text(
        CENTER_X,
        942,
        "ou fecha a aba.",
        28,
        BRAND_PAPER,
        TextAlign::Center,
        1,
    );
    scene.text(
        CENTER_X,
        1010,
        "Não jogue esse tempo fora.",
        28,
        BRAND_PAPER,
        TextAlign::Center,
        1,
    );
    scene.fill_rect(CENTER_X - 360, 1048, 720, 3, BRAND_PAPER);

    slide_number(&mut scene, 2, false);
    scene
}

// --------------------------
// Slide 2: tip 1 (stop being generic)
// --------------------------
fn slide_tip_generic() -> Scene {
    let mut scene = Scene::new(BRAND_GREEN);
    noise_overlay(&mut scene);
    background_disc(&mut scene, -40, (SLIDE_HEIGHT as i32) - 120, BRAND_PAPER);

    scene.fill_rect(PAD, 236, 48, 4, BRAND_PAPER);
    scene.text(
        PAD + 64,
        222,
        "ERRO COMUM #01",
        24,
        BRAND_PAPER,
        TextAlign::Left,
        6,
    );

    scene.text(PAD, 320, "1. PARE DE SER", 62, BRAND_PAPER, TextAlign::Left, -2);
    scene.text(PAD, 410, "GENÉRICO", 100, BRAND_GREEN_LIGHT, TextAlign::Left, -4);

    // Quote rail
    scene.fill_rect(PAD, 600, 3, 460, BRAND_PAPER.with_opacity(0.3));
    scene.fill_circle(PAD, 620, 30, BRAND_GREEN);
    scene.stroke_circle(PAD, 620, 30, 2, BRAND_PAPER);
    scene.text(
        PAD + 48,
        600,
        "\"Se você fala com todo mundo,",
        30,
        BRAND_PAPER.with_opacity(0.9),
        TextAlign::Left,
        1,
    );
    scene.text(
        PAD + 48,
        654,
        "não fala com ninguém.\"",
        30,
        BRAND_PAPER.with_opacity(0.9),
        TextAlign::Left,
        1,
    );

    // Answer card
    scene.fill_rect(PAD + 48, 760, 640, 260, BRAND_PAPER);
    scene.text(
        PAD + 88,
        800,
        "RESPONDA AGORA:",
        22,
        BRAND_GREEN.with_opacity(0.6),
        TextAlign::Left,
        6,
    );
    scene.text(
        PAD + 88,
        856,
        "\"O que você faz e",
        40,
        BRAND_GREEN,
        TextAlign::Left,
        0,
    );
    scene.text(PAD + 88, 920, "para quem?\"", 40, BRAND_GREEN, TextAlign::Left, 0);

    slide_number(&mut scene, 3, true);
    scene
}

// --------------------------
// Slide 3: tip 2 (the invisible button)
// --------------------------
fn slide_tip_invisible_button() -> Scene {
    let mut scene = Scene::new(BRAND_PAPER);
    background_disc(&mut scene, (SLIDE_WIDTH as i32) - 60, 675, BRAND_GREEN);

    scene.text(PAD, 240, "2. O BOTÃO", 90, BRAND_GREEN, TextAlign::Left, -4);
    scene.text(PAD, 360, "INVISÍVEL", 90, BRAND_GREEN, TextAlign::Left, -4);

    scene.text(
        PAD,
        560,
        "O maior erro é não dizer o que",
        30,
        BRAND_GREEN,
        TextAlign::Left,
        1,
    );
    scene.text(
        PAD,
        614,
        "o cliente deve fazer.",
        30,
        BRAND_GREEN,
        TextAlign::Left,
        1,
    );
    scene.text(
        PAD,
        668,
        "Ele não vai adivinhar.",
        30,
        BRAND_GREEN,
        TextAlign::Left,
        1,
    );

    scene.text(
        PAD,
        810,
        "EXEMPLO DE CTA ÓBVIO:",
        20,
        BRAND_GREEN,
        TextAlign::Left,
        6,
    );

    // Button simulation with offset hard shadow
    scene.fill_rect(PAD + 20, 880, 880, 120, BRAND_BLACK);
    scene.fill_rect(PAD, 860, 880, 120, BRAND_GREEN);
    scene.stroke_rect(PAD, 860, 880, 120, 4, BRAND_BLACK);
    scene.text(
        PAD + 60,
        900,
        "QUERO DESENROLAR MEU SITE",
        28,
        BRAND_PAPER,
        TextAlign::Left,
        2,
    );

    slide_number(&mut scene, 4, false);
    scene
}

// --------------------------
// Slide 4: tip 3 (the power of a single yes)
// --------------------------
fn slide_tip_single_yes() -> Scene {
    let mut scene = Scene::new(BRAND_GREEN);
    noise_overlay(&mut scene);
    background_disc(&mut scene, (SLIDE_WIDTH as i32) - 40, 40, BRAND_PAPER);

    scene.stroke_circle(PAD + 48, 248, 48, 3, BRAND_PAPER);
    scene.text(PAD + 48, 226, "3", 48, BRAND_PAPER, TextAlign::Center, 0);

    scene.text(PAD, 370, "O PODER DE UM", 72, BRAND_PAPER, TextAlign::Left, -2);
    scene.text(PAD, 470, "ÚNICO \"SIM\"", 72, BRAND_PAPER, TextAlign::Left, -2);

    // Rail + copy
    scene.fill_rect(PAD, 620, 4, 256, BRAND_PAPER.with_opacity(0.2));
    scene.text(
        PAD + 52,
        630,
        "Você não precisa de mil",
        30,
        BRAND_PAPER,
        TextAlign::Left,
        1,
    );
    scene.text(
        PAD + 52,
        684,
        "provas sociais falsas.",
        30,
        BRAND_PAPER,
        TextAlign::Left,
        1,
    );

    // Testimonial panel
    scene.fill_rect(PAD + 52, 780, 820, 300, BRAND_PAPER.with_opacity(0.1));
    scene.stroke_rect(PAD + 52, 780, 820, 300, 2, BRAND_PAPER.with_opacity(0.2));
    scene.fill_circle(PAD + 100, 836, 16, BRAND_PAPER);
    scene.text(
        PAD + 140,
        822,
        "A VERDADE",
        22,
        BRAND_PAPER,
        TextAlign::Left,
        6,
    );
    scene.text(
        PAD + 92,
        900,
        "\"Um depoimento real e forte",
        28,
        BRAND_PAPER,
        TextAlign::Left,
        1,
    );
    scene.text(
        PAD + 92,
        952,
        "quebra qualquer objeção de",
        28,
        BRAND_PAPER,
        TextAlign::Left,
        1,
    );
    scene.text(
        PAD + 92,
        1004,
        "quem está em dúvida.\"",
        28,
        BRAND_PAPER,
        TextAlign::Left,
        1,
    );

    slide_number(&mut scene, 5, true);
    scene
}

// --------------------------
// Slide 5: final CTA
// --------------------------
fn slide_final_cta() -> Scene {
    let mut scene = Scene::new(BRAND_GREEN);
    noise_overlay(&mut scene);
    background_disc(&mut scene, CENTER_X, 560, BRAND_PAPER);

    // Top pill
    scene.fill_rect(CENTER_X - 190, 84, 380, 56, BRAND_PAPER.with_opacity(0.1));
    scene.stroke_rect(CENTER_X - 190, 84, 380, 56, 2, BRAND_PAPER.with_opacity(0.1));
    scene.fill_circle(CENTER_X - 156, 112, 9, BRAND_PAPER);
    scene.text(
        CENTER_X + 16,
        100,
        "O QUE VOCÊ GANHA",
        20,
        BRAND_PAPER,
        TextAlign::Center,
        5,
    );

    scene.text(CENTER_X, 250, "NÃO SEJA O", 96, BRAND_PAPER, TextAlign::Center, -4);
    outlined_text(&mut scene, CENTER_X, 380, "ÚLTIMO A SABER.", 96, BRAND_PAPER, BRAND_GREEN);

    // Benefit list
    scene.fill_circle(PAD + 160, 600, 9, BRAND_PAPER);
    scene.text(
        PAD + 200,
        572,
        "DICAS DIÁRIAS",
        44,
        BRAND_PAPER,
        TextAlign::Left,
        0,
    );
    scene.text(
        PAD + 200,
        636,
        "Conteúdo todo dia pra você",
        26,
        BRAND_PAPER.with_opacity(0.7),
        TextAlign::Left,
        1,
    );
    scene.text(
        PAD + 200,
        682,
        "não travar na hora de criar.",
        26,
        BRAND_PAPER.with_opacity(0.7),
        TextAlign::Left,
        1,
    );

    scene.fill_circle(PAD + 160, 790, 9, BRAND_PAPER);
    scene.text(
        PAD + 200,
        762,
        "ESTRATÉGIAS REAIS",
        44,
        BRAND_PAPER,
        TextAlign::Left,
        0,
    );
    scene.text(
        PAD + 200,
        826,
        "Zero teoria. Apenas o que",
        26,
        BRAND_PAPER.with_opacity(0.7),
        TextAlign::Left,
        1,
    );
    scene.text(
        PAD + 200,
        872,
        "funciona no campo de batalha.",
        26,
        BRAND_PAPER.with_opacity(0.7),
        TextAlign::Left,
        1,
    );

    scene.text(
        (SLIDE_WIDTH as i32) - PAD,
        1020,
        "06",
        40,
        BRAND_PAPER.with_opacity(0.2),
        TextAlign::Right,
        0,
    );

    // Footer follow bar
    let footer_y = (SLIDE_HEIGHT as i32) - 200;
    scene.fill_rect(0, footer_y, SLIDE_WIDTH, 200, BRAND_PAPER);
    scene.fill_circle(PAD + 40, footer_y + 100, 40, BRAND_GREEN);
    scene.stroke_circle(PAD + 40, footer_y + 100, 40, 3, BRAND_GREEN);
    scene.text(
        PAD + 40,
        footer_y + 82,
        "W",
        36,
        BRAND_PAPER,
        TextAlign::Center,
        0,
    );
    scene.text(
        PAD + 110,
        footer_y + 62,
        "@webdesenrola",
        36,
        BRAND_GREEN,
        TextAlign::Left,
        0,
    );
    scene.text(
        PAD + 110,
        footer_y + 118,
        "DESENROLA SEU NEGÓCIO",
        18,
        BRAND_GREEN.with_opacity(0.6),
        TextAlign::Left,
        5,
    );
    scene.fill_rect((SLIDE_WIDTH as i32) - PAD - 260, footer_y + 60, 260, 80, BRAND_GREEN);
    scene.text(
        (SLIDE_WIDTH as i32) - PAD - 130,
        footer_y + 86,
        "SEGUIR",
        26,
        BRAND_PAPER,
        TextAlign::Center,
        4,
    );

    scene
}
