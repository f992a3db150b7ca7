//! Collective data movement between the ranks of one job.
//!
//! The force pipeline needs only two collectives: [`Communicator::distribute`] (root to
//! everyone) and [`Communicator::collect`] (everyone to root). [`LocalCluster`] provides an
//! in-process implementation that runs each rank on its own thread, wired in a star around
//! the root with `crossbeam-channel`.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::utils::ForceError;

/// Rank of the coordinating participant.
pub const ROOT_RANK: usize = 0;

/// The two collective operations the force pipeline is written against.
///
/// Every rank must call the collectives in the same order. Both calls block: `distribute`
/// until the root's value has arrived, `collect` (on the root) until every rank has submitted.
pub trait Communicator {
    fn rank(&self) -> usize;

    /// Number of participating ranks.
    fn size(&self) -> usize;

    fn is_root(&self) -> bool {
        self.rank() == ROOT_RANK
    }

    /// The root supplies `Some(value)`; every rank, root included, returns an identical copy.
    /// Values passed by non-root ranks are ignored.
    fn distribute<T: Clone + Send + 'static>(&self, value: Option<T>) -> Result<T, ForceError>;

    /// Every rank submits `local`. The root receives all submissions ordered by rank; the
    /// other ranks receive `None`.
    fn collect<T: Send + 'static>(&self, local: T) -> Result<Option<Vec<T>>, ForceError>;
}

struct Envelope {
    from: usize,
    round: u64,
    payload: Box<dyn Any + Send>,
}

enum Links {
    Root {
        inbox: Receiver<Envelope>,
        // members[r - 1] reaches rank r
        members: Vec<Sender<Envelope>>,
    },
    Member {
        inbox: Receiver<Envelope>,
        root: Sender<Envelope>,
    },
}

/// One rank's endpoint in an in-process group.
///
/// Only the root holds senders to the members and only the members hold senders to the
/// root, so a rank that exits early disconnects its peers instead of leaving them blocked.
pub struct LocalCommunicator {
    rank: usize,
    size: usize,
    round: Cell<u64>,
    links: Links,
    early: RefCell<Vec<Envelope>>,
}

impl LocalCommunicator {
    /// Creates a connected group of `size` endpoints, ordered by rank.
    ///
    /// # Errors
    ///
    /// Returns `ForceError::InvalidWorkerCount` if `size` is zero.
    pub fn group(size: usize) -> Result<Vec<LocalCommunicator>, ForceError> {
        if size == 0 {
            return Err(ForceError::InvalidWorkerCount);
        }

        let (to_root, root_inbox) = unbounded();
        let mut members = Vec::with_capacity(size - 1);
        let mut endpoints = Vec::with_capacity(size);
        for rank in 1..size {
            let (to_member, member_inbox) = unbounded();
            members.push(to_member);
            endpoints.push(LocalCommunicator::with_links(rank, size, Links::Member {
                inbox: member_inbox,
                root: to_root.clone(),
            }));
        }
        endpoints.insert(0, LocalCommunicator::with_links(ROOT_RANK, size, Links::Root {
            inbox: root_inbox,
            members,
        }));
        Ok(endpoints)
    }

    fn with_links(rank: usize, size: usize, links: Links) -> Self {
        LocalCommunicator {
            rank,
            size,
            round: Cell::new(0),
            links,
            early: RefCell::new(Vec::new()),
        }
    }

    fn next_round(&self) -> u64 {
        let round = self.round.get();
        self.round.set(round + 1);
        round
    }

    fn unpack<T: 'static>(envelope: Envelope) -> Result<T, ForceError> {
        let from = envelope.from;
        envelope
            .payload
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| ForceError::TransportMismatch(format!(
                "rank {} sent a payload of an unexpected type",
                from
            )))
    }
}

impl Communicator for LocalCommunicator {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn distribute<T: Clone + Send + 'static>(&self, value: Option<T>) -> Result<T, ForceError> {
        let round = self.next_round();
        match &self.links {
            Links::Root { members, .. } => {
                let value = value.ok_or_else(|| {
                    ForceError::TransportMismatch("root rank has nothing to distribute".to_string())
                })?;
                for (offset, member) in members.iter().enumerate() {
                    let envelope = Envelope {
                        from: ROOT_RANK,
                        round,
                        payload: Box::new(value.clone()),
                    };
                    member
                        .send(envelope)
                        .map_err(|_| ForceError::WorkerFailed(offset + 1))?;
                }
                Ok(value)
            }
            Links::Member { inbox, .. } => {
                let envelope = inbox.recv().map_err(|_| ForceError::WorkerFailed(ROOT_RANK))?;
                if envelope.round != round {
                    return Err(ForceError::TransportMismatch(format!(
                        "rank {} expected round {} but root sent round {}",
                        self.rank, round, envelope.round
                    )));
                }
                Self::unpack(envelope)
            }
        }
    }

    fn collect<T: Send + 'static>(&self, local: T) -> Result<Option<Vec<T>>, ForceError> {
        let round = self.next_round();
        match &self.links {
            Links::Member { root, .. } => {
                let envelope = Envelope {
                    from: self.rank,
                    round,
                    payload: Box::new(local),
                };
                root.send(envelope).map_err(|_| ForceError::WorkerFailed(ROOT_RANK))?;
                Ok(None)
            }
            Links::Root { inbox, .. } => {
                let mut slots: Vec<Option<T>> = (0..self.size).map(|_| None).collect();
                slots[ROOT_RANK] = Some(local);
                let mut missing = self.size - 1;

                // Submissions for this round that arrived during an earlier collect.
                let ready: Vec<Envelope> = {
                    let mut early = self.early.borrow_mut();
                    let (ready, later): (Vec<Envelope>, Vec<Envelope>) = early.drain(..).partition(|e| e.round == round);
                    *early = later;
                    ready
                };

                let place = |envelope: Envelope, slots: &mut Vec<Option<T>>| -> Result<(), ForceError> {
                    let from = envelope.from;
                    if from == ROOT_RANK || from >= self.size || slots[from].is_some() {
                        return Err(ForceError::TransportMismatch(format!(
                            "unexpected submission from rank {} in round {}",
                            from, round
                        )));
                    }
                    slots[from] = Some(Self::unpack(envelope)?);
                    Ok(())
                };

                for envelope in ready {
                    place(envelope, &mut slots)?;
                    missing -= 1;
                }

                while missing > 0 {
                    let envelope = match inbox.recv() {
                        Ok(envelope) => envelope,
                        Err(_) => {
                            let absent = slots.iter().position(Option::is_none).unwrap_or(ROOT_RANK);
                            return Err(ForceError::WorkerFailed(absent));
                        }
                    };
                    if envelope.round > round {
                        self.early.borrow_mut().push(envelope);
                        continue;
                    }
                    if envelope.round < round {
                        return Err(ForceError::TransportMismatch(format!(
                            "rank {} submitted for finished round {}",
                            envelope.from, envelope.round
                        )));
                    }
                    place(envelope, &mut slots)?;
                    missing -= 1;
                }

                Ok(Some(slots.into_iter().flatten().collect()))
            }
        }
    }
}

/// Runs one closure per rank on dedicated threads and returns their results in rank order.
pub struct LocalCluster;

impl LocalCluster {
    /// Spawns `worker_count` ranks, each calling `rank_fn` with its own communicator.
    ///
    /// A failure on any rank fails the whole run. When several ranks fail, the first
    /// error that is not a knock-on `WorkerFailed` is returned, so the root cause surfaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_pairforce::distributed::{Communicator, LocalCluster};
    ///
    /// let results = LocalCluster::run(3, |comm| {
    ///     let base: u64 = comm.distribute(if comm.is_root() { Some(100) } else { None })?;
    ///     let gathered = comm.collect(base + comm.rank() as u64)?;
    ///     Ok(gathered)
    /// }).unwrap();
    ///
    /// assert_eq!(results[0], Some(vec![100, 101, 102]));
    /// assert_eq!(results[1], None);
    /// ```
    pub fn run<F, R>(worker_count: usize, rank_fn: F) -> Result<Vec<R>, ForceError>
    where
        F: Fn(LocalCommunicator) -> Result<R, ForceError> + Sync,
        R: Send,
    {
        let endpoints = LocalCommunicator::group(worker_count)?;
        let rank_fn = &rank_fn;

        let outcomes: Vec<Result<R, ForceError>> = thread::scope(|scope| {
            let handles: Vec<_> = endpoints
                .into_iter()
                .map(|comm| {
                    let rank = comm.rank();
                    let handle = thread::Builder::new()
                        .name(format!("rank-{}", rank))
                        .spawn_scoped(scope, move || rank_fn(comm));
                    (rank, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(rank, handle)| match handle {
                    Ok(handle) => handle.join().unwrap_or(Err(ForceError::WorkerFailed(rank))),
                    Err(_) => Err(ForceError::WorkerFailed(rank)),
                })
                .collect()
        });

        let mut results = Vec::with_capacity(worker_count);
        let mut knock_on = None;
        for outcome in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(err @ ForceError::WorkerFailed(_)) => {
                    knock_on.get_or_insert(err);
                }
                Err(err) => return Err(err),
            }
        }
        match knock_on {
            Some(err) => Err(err),
            None => Ok(results),
        }
    }
}
