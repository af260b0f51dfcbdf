//! Session-Datenmodell: Receiver, Transmitter mit Trajektorien und Timeline.

use glam::Vec2;
use std::ops::Range;

/// Statischer Empfänger auf der Oberfläche (dient auch als Snap-Ziel).
#[derive(Debug, Clone, PartialEq)]
pub struct Receiver {
    pub name: String,
    /// Position im virtuellen Raum
    pub position: Vec2,
}

impl Receiver {
    pub fn new(name: impl Into<String>, position: Vec2) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Bewegungsbahn eines Transmitters: eine virtuelle Position pro Timeline-Frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    frames: Vec<Vec2>,
}

impl Trajectory {
    /// Erstellt eine Trajektorie mit `length` Frames an fester Position.
    pub fn constant(length: usize, position: Vec2) -> Self {
        Self {
            frames: vec![position; length],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Vec2] {
        &self.frames
    }

    /// Position zum Frame-Index (`None` außerhalb der Trajektorie).
    pub fn position_at(&self, frame: usize) -> Option<Vec2> {
        self.frames.get(frame).copied()
    }

    /// Überschreibt die Frames ab `range.start` mit `positions`.
    ///
    /// Die Länge wird auf die Trajektorie begrenzt; gibt den tatsächlich
    /// geschriebenen Bereich zurück.
    pub fn overwrite(&mut self, range: Range<usize>, positions: &[Vec2]) -> Range<usize> {
        let end = range.end.min(self.frames.len()).min(range.start + positions.len());
        let start = range.start.min(end);
        self.frames[start..end].copy_from_slice(&positions[..end - start]);
        start..end
    }
}

/// Bewegter Sender, dessen Trajektorie per Gesten-Tool bearbeitet wird.
#[derive(Debug, Clone, PartialEq)]
pub struct Transmitter {
    pub name: String,
    pub trajectory: Trajectory,
}

impl Transmitter {
    pub fn new(name: impl Into<String>, trajectory: Trajectory) -> Self {
        Self {
            name: name.into(),
            trajectory,
        }
    }
}

/// Zeitachse der Session mit optionaler Selektion (in Frames).
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// Frames pro Sekunde der Trajektorien
    pub rate: f32,
    /// Gesamtlänge in Frames
    pub length_frames: usize,
    /// Aktuell selektierter Zeitbereich
    pub selection: Option<Range<usize>>,
}

impl Timeline {
    pub fn new(rate: f32, length_frames: usize) -> Self {
        Self {
            rate,
            length_frames,
            selection: None,
        }
    }

    /// Setzt die Selektion (auf die Timeline-Länge begrenzt).
    pub fn select(&mut self, range: Range<usize>) {
        let end = range.end.min(self.length_frames);
        let start = range.start.min(end);
        self.selection = Some(start..end);
    }

    /// Selektierte Dauer in Sekunden.
    pub fn selection_seconds(&self) -> f32 {
        match &self.selection {
            Some(r) if self.rate > 0.0 => r.len() as f32 / self.rate,
            _ => 0.0,
        }
    }
}

/// Komplette Session: Objekte auf der Oberfläche plus Timeline.
#[derive(Debug, Clone)]
pub struct Session {
    pub receivers: Vec<Receiver>,
    pub transmitters: Vec<Transmitter>,
    pub timeline: Timeline,
    /// Index des Transmitters, den Gesten bearbeiten
    pub selected_transmitter: Option<usize>,
}

impl Session {
    /// Leere Session mit gegebener Timeline.
    pub fn new(timeline: Timeline) -> Self {
        Self {
            receivers: Vec::new(),
            transmitters: Vec::new(),
            timeline,
            selected_transmitter: None,
        }
    }

    /// Demo-Session: vier Receiver im Quadrat, ein Transmitter in der Mitte.
    pub fn demo(rate: f32, seconds: f32) -> Self {
        let length = (rate * seconds).round().max(1.0) as usize;
        let mut session = Self::new(Timeline::new(rate, length));
        for (i, pos) in [
            Vec2::new(0.2, 0.2),
            Vec2::new(0.8, 0.2),
            Vec2::new(0.8, 0.8),
            Vec2::new(0.2, 0.8),
        ]
        .into_iter()
        .enumerate()
        {
            session
                .receivers
                .push(Receiver::new(format!("R{}", i + 1), pos));
        }
        session.add_transmitter("T1", Vec2::splat(0.5));
        session.selected_transmitter = Some(0);
        session.timeline.select(0..length);
        session
    }

    /// Fügt einen Transmitter mit konstanter Trajektorie hinzu und gibt den Index zurück.
    pub fn add_transmitter(&mut self, name: impl Into<String>, position: Vec2) -> usize {
        let trajectory = Trajectory::constant(self.timeline.length_frames, position);
        self.transmitters.push(Transmitter::new(name, trajectory));
        self.transmitters.len() - 1
    }

    /// Receiver-Positionen als Snap-Anker.
    pub fn receiver_anchors(&self) -> Vec<Vec2> {
        self.receivers.iter().map(|r| r.position).collect()
    }

    pub fn selected_transmitter_mut(&mut self) -> Option<&mut Transmitter> {
        let idx = self.selected_transmitter?;
        self.transmitters.get_mut(idx)
    }
}
